/// Static content shown on the page
///
/// Everything here is fixed at compile time. The page never mutates
/// these values; it only derives views from them.

/// A single cat breed entry in the "Popular Cat Breeds" list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BreedRecord {
    /// Display name, also the field the search filter matches against
    pub name: &'static str,
    /// One-sentence description shown in the card body
    pub description: &'static str,
}

/// One wedge of the living environment pie chart
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatSlice {
    pub label: &'static str,
    /// Percentage (all slices sum to 100)
    pub value: f32,
}

pub const PAGE_TITLE: &str = "All About Cats";

pub const INTRO: &str = "Cats are fascinating creatures that have been domesticated for thousands of years. \
They are known for their independence, agility, and affectionate nature. Cats come in various breeds, \
each with its unique characteristics and personalities.";

pub const BREEDS: [BreedRecord; 5] = [
    BreedRecord {
        name: "Siamese",
        description: "Known for their distinctive color points and blue eyes.",
    },
    BreedRecord {
        name: "Maine Coon",
        description: "One of the largest domestic cat breeds, known for their intelligence and playful personality.",
    },
    BreedRecord {
        name: "Persian",
        description: "Recognized for their long fur and flat faces.",
    },
    BreedRecord {
        name: "Bengal",
        description: "Wild-looking cats with leopard-like spots or marbling.",
    },
    BreedRecord {
        name: "Sphynx",
        description: "Hairless cats known for their wrinkled skin and extroverted behavior.",
    },
];

/// Carousel slides, in display order
pub const CAT_IMAGES: [&str; 3] = [
    "https://upload.wikimedia.org/wikipedia/commons/thumb/3/3a/Cat03.jpg/1200px-Cat03.jpg",
    "https://upload.wikimedia.org/wikipedia/commons/thumb/4/4d/Cat_November_2010-1a.jpg/1200px-Cat_November_2010-1a.jpg",
    "https://upload.wikimedia.org/wikipedia/commons/thumb/b/bb/Kittyply_edit1.jpg/1200px-Kittyply_edit1.jpg",
];

pub const CAT_STATS: [StatSlice; 2] = [
    StatSlice { label: "Indoor", value: 60.0 },
    StatSlice { label: "Outdoor", value: 40.0 },
];

/// Slice colors as RGB hex: #0088FE and #00C49F
pub const SLICE_COLORS: [u32; 2] = [0x0088FE, 0x00C49F];

pub const TRIVIA: [&str; 4] = [
    "Cats sleep for about 70% of their lives",
    "A group of cats is called a \"clowder\"",
    "Cats have over 20 different vocalizations",
    "The first cat in space was French, named Felicette",
];

pub const FACT_TITLE: &str = "Did you know?";
pub const FACT_DESCRIPTION: &str = "Cats have over 20 muscles that control their ears.";

/// Alt text for a carousel slide (1-based, like the captions)
pub fn image_alt(index: usize) -> String {
    format!("Cat {}", index + 1)
}
