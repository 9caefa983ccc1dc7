//! Built-in link set shown when the remote store yields nothing usable.
//!
//! None of these links carry a row index, so they are display-only.

use crate::{Link, LinkCategory};

const FALLBACK: &[(&str, &str, &[(&str, &str)])] = &[
    (
        "Works",
        "RINA fav Links",
        &[
            ("Leonardo Info", "https://www.leonardoinfo.com"),
            ("Stack Overflow", "https://stackoverflow.com"),
            ("MDN Web Docs", "https://developer.mozilla.org"),
            ("VS Code", "https://code.visualstudio.com"),
        ],
    ),
    (
        "Learning",
        "Educational resources and courses",
        &[
            ("freeCodeCamp", "https://freecodecamp.org"),
            ("Udemy", "https://udemy.com"),
            ("Coursera", "https://coursera.org"),
            ("Codecademy", "https://codecademy.com"),
        ],
    ),
    (
        "Productivity",
        "Productivity and collaboration tools",
        &[
            ("Notion", "https://notion.so"),
            ("Trello", "https://trello.com"),
            ("Slack", "https://slack.com"),
            ("Google Drive", "https://drive.google.com"),
        ],
    ),
    (
        "Design",
        "Design and creative tools",
        &[
            ("Figma", "https://figma.com"),
            ("Unsplash", "https://unsplash.com"),
            ("Tailwind CSS", "https://tailwindcss.com"),
            ("Dribbble", "https://dribbble.com"),
        ],
    ),
];

pub fn fallback_categories() -> Vec<LinkCategory> {
    FALLBACK
        .iter()
        .map(|(name, description, links)| LinkCategory {
            name: (*name).to_string(),
            description: (*description).to_string(),
            links: links
                .iter()
                .map(|(title, url)| Link::local(*title, *url))
                .collect(),
        })
        .collect()
}
