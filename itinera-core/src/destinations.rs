//! Preset destination table.
//!
//! Each profile bundles the curated activity list, the seasonal weather lines
//! and the language note for one destination. Weather lines carry a `{month}`
//! placeholder filled in by the advice lookup.

/// Seasonal weather lines, indexed by [`crate::advice::Season`].
#[derive(Debug, Clone, Copy)]
pub struct SeasonalWeather {
    pub winter: &'static str,
    pub spring: &'static str,
    pub summer: &'static str,
    pub autumn: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct DestinationProfile {
    pub name: &'static str,
    /// Time-of-day highlights.
    pub base_points: &'static [&'static str],
    pub extra_tasks: &'static [&'static str],
    pub weather: SeasonalWeather,
    pub language: &'static str,
}

impl DestinationProfile {
    /// Base points followed by extra tasks.
    pub fn candidates(&self) -> Vec<&'static str> {
        self.base_points
            .iter()
            .chain(self.extra_tasks.iter())
            .copied()
            .collect()
    }
}

pub const PRESETS: &[DestinationProfile] = &[PARIS, TOKYO, NEW_YORK, GOA];

/// Case-insensitive lookup on the trimmed name.
pub fn find_preset(name: &str) -> Option<&'static DestinationProfile> {
    let name = name.trim();
    PRESETS.iter().find(|p| p.name.eq_ignore_ascii_case(name))
}

const PARIS: DestinationProfile = DestinationProfile {
    name: "Paris",
    base_points: &[
        "Morning: Visit the Eiffel Tower and enjoy panoramic views.",
        "Late Morning: Explore the Louvre Museum to see timeless artworks.",
        "Afternoon: Savor lunch at a charming café along the Seine.",
        "Early Afternoon: Visit the exterior of Notre-Dame Cathedral and wander historic streets.",
        "Late Afternoon: Stroll through Montmartre and admire Sacré-Cœur Basilica.",
        "Evening: Dine in a traditional French bistro and sample local specialties.",
        "Night: Enjoy a scenic river cruise on the Seine with illuminated landmarks.",
    ],
    extra_tasks: &[
        "Explore chic boutiques and art galleries in Paris",
        "Attend a classical music concert in Paris",
        "Relax at a riverside park in Paris",
        "Visit a contemporary art museum in Paris",
        "Experience Parisian nightlife in trendy bars",
        "Take a pastry-making class in Paris",
        "Shop at local flea markets in Paris",
        "Join a guided walking tour in Montmartre",
    ],
    weather: SeasonalWeather {
        winter: "In {month}, Paris is wintry (around 5-10°C) – pack heavy, warm clothing.",
        spring: "In {month}, Paris enjoys mild spring weather (10-15°C) with occasional rain – bring a light jacket and umbrella.",
        summer: "In {month}, Paris is pleasantly warm (20-25°C) though evenings can be cool – opt for light clothing and a sweater.",
        autumn: "In {month}, Paris is cool and sometimes rainy (10-15°C) – layering is advisable.",
    },
    language: "French is the official language. Basic phrases like 'Bonjour', 'Merci', and 'Au revoir' are very useful.",
};

const TOKYO: DestinationProfile = DestinationProfile {
    name: "Tokyo",
    base_points: &[
        "Morning: Begin at Senso-ji Temple in Asakusa and explore bustling market streets.",
        "Late Morning: Wander along Nakamise Street while sampling traditional snacks.",
        "Afternoon: Enjoy a sushi lunch at a renowned local eatery.",
        "Early Afternoon: Stroll through Ueno Park and visit eclectic museums.",
        "Late Afternoon: Experience the energy of Shibuya Crossing.",
        "Evening: Dine in Shinjuku and take in the lively nightlife.",
        "Night: Relax at an izakaya or enjoy city views from an observatory.",
    ],
    extra_tasks: &[
        "Explore futuristic art galleries in Tokyo",
        "Attend a traditional Kabuki performance in Tokyo",
        "Relax in a serene Japanese garden in Tokyo",
        "Visit a modern museum in Tokyo",
        "Experience Tokyo's bustling nightlife in Shibuya",
        "Take a sushi-making class in Tokyo",
        "Shop at local district markets in Tokyo",
        "Join a guided tour of historical temples in Tokyo",
    ],
    weather: SeasonalWeather {
        winter: "During {month}, Tokyo can be chilly (5-10°C) – pack warm layers.",
        spring: "In {month}, Tokyo enjoys mild weather (10-18°C) with some rain – dress in layers and carry an umbrella.",
        summer: "In {month}, Tokyo is hot and humid (25-30°C) – wear light, breathable clothing and use sunscreen.",
        autumn: "In {month}, Tokyo's weather is mild with occasional showers (15-20°C) – a light jacket is sufficient.",
    },
    language: "Japanese is the primary language. Learning phrases like 'こんにちは (Konnichiwa)' and 'ありがとう (Arigatou)' can enhance your trip.",
};

const NEW_YORK: DestinationProfile = DestinationProfile {
    name: "New York",
    base_points: &[
        "Morning: Start with breakfast in Times Square to feel the city’s energy.",
        "Late Morning: Walk through Central Park, visiting iconic spots like Bethesda Terrace.",
        "Afternoon: Have lunch at a famous deli and visit a world-class museum.",
        "Early Afternoon: Explore trendy neighborhoods like SoHo for art and shopping.",
        "Late Afternoon: Take a ferry ride to see the Statue of Liberty up close.",
        "Evening: Enjoy a Broadway show followed by dinner at a top-tier restaurant.",
        "Night: Experience the vibrant nightlife or take a relaxing stroll through a buzzing district.",
    ],
    extra_tasks: &[
        "Explore local art galleries in New York",
        "Attend a Broadway musical in New York",
        "Relax in Central Park",
        "Visit a cutting-edge museum in New York",
        "Experience New York's vibrant nightlife",
        "Take a culinary tour of New York's diverse neighborhoods",
        "Shop at trendy boutiques and street fairs in New York",
        "Join a guided historical tour of Manhattan",
    ],
    weather: SeasonalWeather {
        winter: "New York in {month} is cold (−2°C to 5°C) – heavy winter attire is a must.",
        spring: "In {month}, New York is mild (10-18°C) but can be unpredictable – dress in layers and bring a raincoat.",
        summer: "{month} in New York is hot and humid (25-30°C) – wear light clothing and stay hydrated.",
        autumn: "During {month}, New York has moderate temperatures (10-20°C) – layered clothing is recommended.",
    },
    language: "English is the primary language.",
};

const GOA: DestinationProfile = DestinationProfile {
    name: "Goa",
    base_points: &[
        "Morning: Relax on Baga Beach and watch a serene sunrise over the Arabian Sea.",
        "Late Morning: Explore Fort Aguada for its historic charm and coastal views.",
        "Afternoon: Savor a seafood lunch at a beachside shack.",
        "Early Afternoon: Tour a spice plantation to learn about local flavors.",
        "Late Afternoon: Enjoy water sports or take a boat ride along the coast.",
        "Evening: Stroll along the beach while sampling local street food.",
        "Night: Dine on authentic Goan cuisine and enjoy live music by the sea.",
    ],
    extra_tasks: &[
        "Explore local art galleries in Goa",
        "Attend a cultural performance in Goa",
        "Relax in one of Goa's scenic parks",
        "Visit an offbeat museum in Goa",
        "Experience the vibrant nightlife of Goa",
        "Take a local cooking class in Goa",
        "Shop at Mapusa Market in Goa",
        "Shop at Anjuna Flea Market in Goa",
        "Join a guided historical tour in Goa",
    ],
    weather: SeasonalWeather {
        winter: "In {month}, Goa is cooler (20-25°C) and ideal for sightseeing – pack a light jacket for evenings.",
        spring: "{month} in Goa is warm (25-30°C) and dry – opt for very light, breathable clothing.",
        summer: "During {month}, Goa is hot and humid (28-33°C) with occasional rain – choose ultra-light clothes, use sunscreen, and stay hydrated.",
        autumn: "In {month}, Goa is pleasantly warm (25-30°C) with a chance of brief showers – pack accordingly.",
    },
    language: "English is widely spoken along with Konkani. Basic English usually suffices.",
};
