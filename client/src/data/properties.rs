//! Property listings shown on the marketing and listing pages.

use super::types::Property;

#[allow(clippy::too_many_arguments)]
fn listing(
    id: u32,
    title: &str,
    location: &str,
    price: u32,
    bedrooms: u8,
    bathrooms: u8,
    description: &str,
    amenities: &[&str],
    tags: &[&str],
) -> Property {
    Property {
        id,
        title: title.to_owned(),
        location: location.to_owned(),
        price,
        bedrooms,
        bathrooms,
        image: format!("https://picsum.photos/seed/nestmate-{id}/800/520"),
        description: description.to_owned(),
        amenities: amenities.iter().map(|s| (*s).to_owned()).collect(),
        tags: tags.iter().map(|s| (*s).to_owned()).collect(),
    }
}

/// All listings in "recommended" order.
pub fn properties() -> Vec<Property> {
    vec![
        listing(
            1,
            "Sunny room in Williamsburg loft",
            "Brooklyn, NY",
            1250,
            3,
            2,
            "Private bedroom with skylight in a converted warehouse loft. Shared kitchen and rooftop.",
            &["Wi-Fi", "Laundry", "Rooftop", "Furnished"],
            &["Loft", "Near subway"],
        ),
        listing(
            2,
            "Modern studio share near Central Park",
            "Manhattan, NY",
            1850,
            2,
            1,
            "Bright two-bedroom with a doorman, five minutes from the park.",
            &["Wi-Fi", "Doorman", "Gym", "Dishwasher"],
            &["Luxury", "Near park"],
        ),
        listing(
            3,
            "Cozy room in Astoria townhouse",
            "Queens, NY",
            980,
            4,
            2,
            "Friendly house of four with a backyard garden and weekly cleaning.",
            &["Wi-Fi", "Laundry", "Backyard"],
            &["Budget", "Pet friendly"],
        ),
        listing(
            4,
            "Waterfront apartment room",
            "Jersey City, NJ",
            1400,
            2,
            2,
            "Private bath, skyline views and a short PATH ride into Manhattan.",
            &["Wi-Fi", "Gym", "Pool", "Dishwasher", "Parking"],
            &["Waterfront", "Near subway"],
        ),
        listing(
            5,
            "Artist's room in Bushwick",
            "Brooklyn, NY",
            890,
            3,
            1,
            "Creative household with a shared studio space. Utilities included.",
            &["Wi-Fi", "Studio space", "Furnished"],
            &["Budget", "Creative"],
        ),
        listing(
            6,
            "Family-style home in Hoboken",
            "Hoboken, NJ",
            1150,
            3,
            2,
            "Quiet brownstone floor with a large kitchen and a dog-friendly landlord.",
            &["Wi-Fi", "Laundry", "Backyard", "Dishwasher"],
            &["Pet friendly", "Quiet"],
        ),
        listing(
            7,
            "Penthouse room with terrace",
            "Manhattan, NY",
            2400,
            3,
            3,
            "Top-floor share with a private terrace and concierge service.",
            &["Wi-Fi", "Doorman", "Gym", "Rooftop", "Parking"],
            &["Luxury"],
        ),
        listing(
            8,
            "Garden-level room in Park Slope",
            "Brooklyn, NY",
            1320,
            2,
            1,
            "Leafy street, brownstone charm and a shared garden for summer dinners.",
            &["Wi-Fi", "Laundry", "Backyard", "Furnished"],
            &["Quiet", "Near park"],
        ),
    ]
}
