//! Fixed lookup tables: keyword vocabulary, palettes and copy per category.
//!
//! Table order is the classification tie-break order.

use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Gaming,
    Finance,
    Travel,
    Tech,
    Creator,
    Education,
    Fitness,
    Food,
    /// No keyword matched.
    General,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Mood {
    Energetic,
    Calm,
    Neutral,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub accent: &'static str,
    pub from: &'static str,
    pub to: &'static str,
}

#[derive(Debug)]
pub struct CategoryProfile {
    pub category: Category,
    pub keywords: &'static [&'static str],
    pub palettes: &'static [Palette],
    /// Each template contains exactly one `{hook}`.
    pub title_templates: &'static [&'static str],
    pub fallback_hook: &'static str,
    pub default_subtitle: &'static str,
    pub taglines: &'static [&'static str],
    pub badges: &'static [&'static str],
    pub rationale: &'static str,
}

impl Category {
    pub fn profile(self) -> &'static CategoryProfile {
        CATEGORY_TABLE
            .iter()
            .find(|p| p.category == self)
            .unwrap_or(&GENERAL_PROFILE)
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::Gaming => "gaming",
            Category::Finance => "finance",
            Category::Travel => "travel",
            Category::Tech => "tech",
            Category::Creator => "creator",
            Category::Education => "education",
            Category::Fitness => "fitness",
            Category::Food => "food",
            Category::General => "general",
        }
    }
}

pub static CATEGORY_TABLE: &[CategoryProfile] = &[
    CategoryProfile {
        category: Category::Gaming,
        keywords: &[
            "gaming", "game", "games", "gamer", "gamers", "gameplay", "fortnite", "minecraft",
            "valorant", "esports", "tournament", "twitch", "streamer", "speedrun", "boss",
            "console", "playstation", "xbox", "nintendo", "multiplayer",
        ],
        palettes: &[
            Palette {
                accent: "#a3e635",
                from: "#312e81",
                to: "#db2777",
            },
            Palette {
                accent: "#22d3ee",
                from: "#1e1b4b",
                to: "#7c3aed",
            },
        ],
        title_templates: &["{hook}: Game On", "Level Up: {hook}", "{hook} Boss Mode"],
        fallback_hook: "Next Match",
        default_subtitle: "Clutch plays, big moments, and the highlights that matter",
        taglines: &["Gaming Spotlight", "Live Event", "Pro Plays"],
        badges: &["Join Now", "Watch Live", "Play Along"],
        rationale: "Neon accent on a deep violet gradient matches the energy of gaming feeds.",
    },
    CategoryProfile {
        category: Category::Finance,
        keywords: &[
            "finance", "financial", "money", "invest", "investing", "investment", "stock",
            "stocks", "crypto", "bitcoin", "budget", "budgeting", "savings", "wealth",
            "income", "dividend", "retirement", "debt", "passive",
        ],
        palettes: &[
            Palette {
                accent: "#facc15",
                from: "#064e3b",
                to: "#0f172a",
            },
            Palette {
                accent: "#34d399",
                from: "#0f172a",
                to: "#155e75",
            },
        ],
        title_templates: &["{hook}: Money Moves", "Smart Money: {hook}", "{hook} Wealth Plan"],
        fallback_hook: "Your Money",
        default_subtitle: "A clear plan for growing and protecting what you earn",
        taglines: &["Money Masterclass", "Finance Breakdown", "Wealth Playbook"],
        badges: &["Free Guide", "Start Today", "Step By Step"],
        rationale: "Deep green and gold signal trust and growth, the core promise of finance content.",
    },
    CategoryProfile {
        category: Category::Travel,
        keywords: &[
            "travel", "traveling", "trip", "vlog", "explore", "exploring", "adventure",
            "destination", "journey", "beach", "island", "city", "japan", "kyoto", "tokyo",
            "paris", "backpacking", "itinerary", "roadtrip", "hidden",
        ],
        palettes: &[
            Palette {
                accent: "#fb923c",
                from: "#0ea5e9",
                to: "#f43f5e",
            },
            Palette {
                accent: "#fde047",
                from: "#0369a1",
                to: "#14b8a6",
            },
        ],
        title_templates: &["{hook}: Wander List", "Escape To {hook}", "{hook} Unlocked"],
        fallback_hook: "Somewhere New",
        default_subtitle: "Places, flavors, and detours worth the journey",
        taglines: &["Travel Diaries", "Passport Ready", "Wanderlust"],
        badges: &["Explore Now", "New Vlog", "Trip Guide"],
        rationale: "Sky-to-sunset gradient evokes the warmth and wonder of travel.",
    },
    CategoryProfile {
        category: Category::Tech,
        keywords: &[
            "tech", "technology", "ai", "gadget", "gadgets", "iphone", "android", "laptop",
            "coding", "code", "software", "automation", "robot", "robots", "electric", "ev",
            "futuristic", "future", "startup", "app", "chip",
        ],
        palettes: &[
            Palette {
                accent: "#38bdf8",
                from: "#020617",
                to: "#1d4ed8",
            },
            Palette {
                accent: "#c084fc",
                from: "#0f172a",
                to: "#0e7490",
            },
        ],
        title_templates: &["{hook}: Future Ready", "Next-Gen {hook}", "{hook} Decoded"],
        fallback_hook: "The Next Big Thing",
        default_subtitle: "What it does, why it matters, and what comes next",
        taglines: &["Tech Deep Dive", "Future Lab", "First Look"],
        badges: &["Hands-On", "Watch Now", "Full Review"],
        rationale: "Electric blue on near-black reads as precise and modern for tech audiences.",
    },
    CategoryProfile {
        category: Category::Creator,
        keywords: &[
            "youtube", "channel", "creator", "creators", "subscribers", "views", "viral",
            "storytelling", "content", "audience", "grow",
            "growth", "shorts", "algorithm",
        ],
        palettes: &[
            Palette {
                accent: "#f97316",
                from: "#7f1d1d",
                to: "#1e1b4b",
            },
            Palette {
                accent: "#f472b6",
                from: "#4c1d95",
                to: "#0f172a",
            },
        ],
        title_templates: &["{hook}: Creator Playbook", "Go Viral: {hook}", "{hook} Blueprint"],
        fallback_hook: "Your Channel",
        default_subtitle: "The exact system creators use to grow faster",
        taglines: &["Creator Lab", "Growth Hacks", "Channel Boost"],
        badges: &["Steal This", "Free Template", "Watch Now"],
        rationale: "Warm accent over a dramatic gradient stands out in a crowded subscription feed.",
    },
    CategoryProfile {
        category: Category::Education,
        keywords: &[
            "learn", "learning", "tutorial", "lesson", "course", "explained", "explainer",
            "guide", "study", "students", "beginner", "beginners", "masterclass", "science",
            "history", "math",
        ],
        palettes: &[
            Palette {
                accent: "#fbbf24",
                from: "#1e3a8a",
                to: "#312e81",
            },
            Palette {
                accent: "#5eead4",
                from: "#172554",
                to: "#3730a3",
            },
        ],
        title_templates: &["{hook}: Explained", "Master {hook}", "{hook} In Minutes"],
        fallback_hook: "The Basics",
        default_subtitle: "Everything you need to know, step by step",
        taglines: &["Learn Fast", "Crash Course", "Study Session"],
        badges: &["Start Here", "Free Lesson", "Beginner Friendly"],
        rationale: "Calm blues with a bright accent keep an educational tone without feeling dull.",
    },
    CategoryProfile {
        category: Category::Fitness,
        keywords: &[
            "fitness", "workout", "workouts", "gym", "training", "muscle", "cardio", "yoga",
            "running", "marathon", "exercise", "strength", "hiit", "abs", "weight",
        ],
        palettes: &[
            Palette {
                accent: "#ef4444",
                from: "#111827",
                to: "#7f1d1d",
            },
            Palette {
                accent: "#84cc16",
                from: "#0f172a",
                to: "#365314",
            },
        ],
        title_templates: &["{hook}: No Excuses", "Train Hard: {hook}", "{hook} Transformation"],
        fallback_hook: "Your Best Shape",
        default_subtitle: "A routine you can start today and keep for good",
        taglines: &["Workout Plan", "Fitness Challenge", "Train With Me"],
        badges: &["Start Today", "30-Day Plan", "Follow Along"],
        rationale: "Hot red on charcoal communicates intensity and effort.",
    },
    CategoryProfile {
        category: Category::Food,
        keywords: &[
            "food", "foodie", "recipe", "recipes", "cooking", "cook", "kitchen", "baking",
            "bake", "meal", "meals", "restaurant", "street", "dessert", "chef", "taste",
        ],
        palettes: &[
            Palette {
                accent: "#fde68a",
                from: "#9a3412",
                to: "#be123c",
            },
            Palette {
                accent: "#fef08a",
                from: "#78350f",
                to: "#b91c1c",
            },
        ],
        title_templates: &["{hook}: Taste Test", "Cook It: {hook}", "{hook} Done Right"],
        fallback_hook: "Tonight's Dinner",
        default_subtitle: "Simple steps, big flavor, zero guesswork",
        taglines: &["Kitchen Diaries", "Recipe Drop", "Food Tour"],
        badges: &["Try It", "Easy Recipe", "Must Taste"],
        rationale: "Warm oranges and reds trigger appetite and read as inviting.",
    },
];

pub static GENERAL_PROFILE: CategoryProfile = CategoryProfile {
    category: Category::General,
    keywords: &[],
    palettes: &[
        Palette {
            accent: "#f59e0b",
            from: "#0f172a",
            to: "#4338ca",
        },
        Palette {
            accent: "#f472b6",
            from: "#111827",
            to: "#6d28d9",
        },
    ],
    title_templates: &["{hook}: Must Watch", "Inside {hook}", "{hook} Revealed"],
    fallback_hook: "Your Big Idea",
    default_subtitle: "The story behind it and why it matters",
    taglines: &["Fresh Drop", "Must Watch", "New Episode"],
    badges: &["Watch Now", "New Video", "Don't Miss"],
    rationale: "A versatile indigo gradient keeps the focus on the headline.",
};

pub static ENERGETIC_WORDS: &[&str] = &[
    "high-energy", "energetic", "energy", "bold", "vibrant", "epic", "hype", "insane",
    "explosive", "intense", "loud", "crazy", "extreme", "action", "dramatic", "shocking",
];

pub static CALM_WORDS: &[&str] = &[
    "clean", "minimalist", "minimal", "calm", "simple", "elegant", "soft", "cozy", "relaxing",
    "peaceful", "subtle", "quiet", "gentle", "chill",
];

/// Verbs that introduce the subject of the brief.
pub static INTRO_VERBS: &[&str] = &[
    "announcing", "teaching", "revealing", "exploring", "showing", "featuring", "covering",
    "reviewing", "explaining", "unboxing", "comparing", "testing", "sharing", "ranking",
    "breaking", "discovering", "introducing", "building", "making", "about",
];

/// Words that describe the thumbnail itself rather than its subject.
pub static FILLER_WORDS: &[&str] = &[
    "thumbnail", "thumbnails", "video", "videos", "vlog", "episode", "youtube-style", "style",
    "gaming", "finance", "travel", "tech", "fitness", "food", "education", "creator", "ai-generated",
];

pub static STOPWORDS: &[&str] = &[
    "a", "an", "the", "and", "or", "but", "of", "in", "on", "at", "to", "for", "with", "by",
    "from", "how", "why", "what", "when", "where", "who", "is", "are", "was", "be", "your",
    "my", "our", "their", "this", "that", "these", "those", "into", "over", "under", "it",
    "its", "as", "so", "very", "just",
];

#[cfg(test)]
#[path = "../../tests/unit/design/tables.rs"]
mod tests;
