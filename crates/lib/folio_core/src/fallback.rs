//! Chat backend reply table.
//!
//! Used by the server when no AI provider is configured. Same matching rules
//! as [`crate::keywords`] (lowercased substring, first group wins) but with its
//! own groups, its own order, and groups that carry several interchangeable
//! replies.

/// Trigger words and the replies one of which is chosen.
#[derive(Debug, Clone, Copy)]
pub struct FallbackGroup {
    pub name: &'static str,
    pub keywords: &'static [&'static str],
    pub replies: &'static [&'static str],
}

impl FallbackGroup {
    fn matches(&self, lowered: &str) -> bool {
        self.keywords.iter().any(|k| lowered.contains(k))
    }
}

pub const POETRY_REPLIES: &[&str] = &[
    "Poetry is where technology meets the soul! I'd love to help with poetry. Are you looking for a specific poem, or would you like me to create one?",
    "In the world of code and verse, every algorithm has a rhythm. What aspect of poetry interests you most?",
    "Each poem here bridges technology and human emotion. Would you like to explore a particular theme?",
];

pub const CREATIVE_REPLIES: &[&str] = &[
    "Here's a spontaneous verse for you:\n\n'In circuits deep and data streams,\nWhere algorithms chase their dreams,\nI find the poetry that gleams\nIn every function's perfect schemes.'",
    "Let me craft something just for you:\n\n'Code cascades like rainfall,\nEach line a drop of thought,\nBuilding rivers of logic\nWhere digital dreams are caught.'",
    "Here's a quick composition:\n\n'Between the brackets and the braces,\nLive stories of a thousand places,\nWhere variables dance and functions sing,\nIn the poetry that programming brings.'",
];

pub const INSPIRATION_REPLIES: &[&str] = &[
    "Inspiration comes from the elegant dance of data structures, the symphony of synchronized systems. Every bug fixed is a verse refined, every feature added is a stanza completed.",
];

pub const GREETING_REPLIES: &[&str] = &[
    "Hello! I'm Venkat's AI assistant. I can discuss poetry, technology, and the beautiful intersection where they meet! ✨",
    "Hi there! Whether you're interested in code, poetry, or projects, I'm here to help explore Venkat's creative and technical world.",
    "Greetings! Ready to dive into the world where algorithms meet artistry? How can I help you today?",
];

pub const EXPERIENCE_REPLIES: &[&str] = &[
    "I have diverse experience in data engineering and AI, including current work at Ford Werke GmbH as a Data Engineering Intern, previous roles at AI Variant and Siemens. I specialize in GCP-based ETL workflows, machine learning, and cloud-native data pipelines.",
];

pub const PROJECT_REPLIES: &[&str] = &[
    "I'm currently working on my Masters thesis on Coordinated Multi-Agent Reinforcement Learning for autonomous vehicles. I've also completed projects on NLP analysis of spiritual texts and data augmentation using RAG techniques.",
];

pub const SKILL_REPLIES: &[&str] = &[
    "I specialize in Python, SQL, cloud platforms (GCP, Azure), machine learning frameworks (PyTorch, TensorFlow), and modern data tools like BigQuery, FAISS, and LangChain. I'm particularly experienced in ETL pipelines and NLP applications.",
];

pub const EDUCATION_REPLIES: &[&str] = &[
    "I'm currently pursuing my MSc in Big Data and Artificial Intelligence at SRH University Berlin (2023-2025). I completed my BE in Information Science from Global Academy of Technology, Bengaluru (2018-2022).",
];

pub const CONTACT_REPLIES: &[&str] = &[
    "You can reach me at venkat.chavan.n@gmail.com or connect with me on LinkedIn at linkedin.com/in/venkatchavan16. I'm always open to discussing opportunities in data engineering and AI!",
];

/// Replies when no group matches.
pub const DEFAULT_REPLIES: &[&str] = &[
    "That's fascinating! In the spirit of poetry, let me respond in verse: 'Your words like code compile in my mind, seeking patterns and meaning to find.' What specific aspect interests you?",
    "Every conversation is a collaborative poem! Your input becomes my inspiration. Would you like me to create something based on what you shared?",
    "I love exploring ideas through the lens of poetry and technology. Could you tell me more about what you're thinking?",
    "In the intersection of code and creativity, every question leads to discovery. What would you like to explore?",
];

/// Groups in evaluation order.
pub const FALLBACK_GROUPS: &[FallbackGroup] = &[
    FallbackGroup {
        name: "poetry",
        keywords: &["poem", "poetry", "verse"],
        replies: POETRY_REPLIES,
    },
    FallbackGroup {
        name: "creative",
        keywords: &["write", "create", "generate", "make"],
        replies: CREATIVE_REPLIES,
    },
    FallbackGroup {
        name: "inspiration",
        keywords: &["inspiration", "creative", "process"],
        replies: INSPIRATION_REPLIES,
    },
    FallbackGroup {
        name: "greeting",
        keywords: &["hello", "hi", "hey"],
        replies: GREETING_REPLIES,
    },
    FallbackGroup {
        name: "experience",
        keywords: &["experience", "work", "job"],
        replies: EXPERIENCE_REPLIES,
    },
    FallbackGroup {
        name: "projects",
        keywords: &["project", "research"],
        replies: PROJECT_REPLIES,
    },
    FallbackGroup {
        name: "skills",
        keywords: &["skill", "technology", "tech"],
        replies: SKILL_REPLIES,
    },
    FallbackGroup {
        name: "education",
        keywords: &["education", "study", "university"],
        replies: EDUCATION_REPLIES,
    },
    FallbackGroup {
        name: "contact",
        keywords: &["contact", "reach", "email"],
        replies: CONTACT_REPLIES,
    },
];

/// Returns the first group matching `message`, if any.
pub fn classify(message: &str) -> Option<&'static FallbackGroup> {
    let lowered = message.to_lowercase();
    FALLBACK_GROUPS.iter().find(|g| g.matches(&lowered))
}

/// Candidate replies for `message`: the matched group's, or the defaults.
pub fn candidates(message: &str) -> &'static [&'static str] {
    classify(message).map_or(DEFAULT_REPLIES, |g| g.replies)
}

/// Picks one candidate; `pick` receives the candidate count and returns an
/// index, which is wrapped into range.
pub fn reply_with(message: &str, pick: impl FnOnce(usize) -> usize) -> &'static str {
    let replies = candidates(message);
    replies[pick(replies.len()) % replies.len()]
}
