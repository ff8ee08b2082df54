//! Built-in candidates used when nothing else is supplied

use super::{CandidateSource, SuggestionGroup};

pub fn sample_groups() -> CandidateSource {
    CandidateSource::Grouped(vec![
        SuggestionGroup::new(
            "Fruits",
            [
                "Apple",
                "Banana",
                "Orange",
                "Strawberry",
                "Blueberry",
                "Mango",
                "Pineapple",
                "Watermelon",
                "Grape",
                "Kiwi",
            ],
        ),
        SuggestionGroup::new(
            "Vegetables",
            [
                "Carrot",
                "Broccoli",
                "Spinach",
                "Tomato",
                "Cucumber",
                "Bell Pepper",
                "Potato",
                "Onion",
                "Garlic",
                "Lettuce",
            ],
        ),
        SuggestionGroup::new(
            "Projects",
            [
                "Portfolio Website",
                "E-commerce Platform",
                "Task Management App",
                "Weather Dashboard",
                "Recipe Finder",
                "Fitness Tracker",
                "Budget Calculator",
                "Social Media Dashboard",
                "Real Estate Listing",
                "Travel Planner",
            ],
        ),
    ])
}
