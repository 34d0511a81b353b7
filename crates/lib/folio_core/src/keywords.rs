//! Static keyword responder table.
//!
//! Replies are chosen by case-insensitive substring match against an ordered
//! list of keyword groups. The first matching group wins, so a message that
//! mentions both "project" and "contact" gets the project reply.

/// A set of trigger words and the reply they select.
#[derive(Debug, Clone, Copy)]
pub struct KeywordGroup {
    pub name: &'static str,
    pub keywords: &'static [&'static str],
    pub reply: &'static str,
}

impl KeywordGroup {
    fn matches(&self, lowered: &str) -> bool {
        self.keywords.iter().any(|k| lowered.contains(k))
    }
}

pub const PROJECTS_REPLY: &str = "I've worked on various exciting projects including AI/ML applications, web development, and data analysis. You can explore them in the Projects section of the portfolio!";
pub const SKILLS_REPLY: &str = "My skills include Python, JavaScript, React, Flask, Machine Learning, Data Science, and more. Check out the Skills section on the main page for a complete list!";
pub const EXPERIENCE_REPLY: &str = "I have experience in software development, data science, and AI/ML. Visit the Experience section on the homepage to learn more about my professional journey!";
pub const EDUCATION_REPLY: &str = "My educational background includes studies in Computer Science and related fields. You can find more details in the Education section of the portfolio!";
pub const CONTACT_REPLY: &str = "You can reach out to me through the contact information provided in the portfolio. I'm always open to discussing new opportunities and collaborations!";
pub const GREETING_REPLY: &str = "Hello there! I'm excited to help you learn more about this portfolio. Feel free to ask about projects, skills, experience, or anything else you'd like to know!";
pub const FALLBACK_REPLY: &str = "Thanks for your interest! This is a static demo of the chatbot. For a full interactive experience with AI-powered responses, please check out the live version of the portfolio. Feel free to explore the other sections to learn more!";

/// Opening bot message of the static chat variant.
pub const STATIC_GREETING: &str = "Hello! I'm a static version of the portfolio chatbot. While I can't connect to AI services in this demo, I can share some information about this portfolio!";

/// Keyword groups in evaluation order.
pub const KEYWORD_GROUPS: &[KeywordGroup] = &[
    KeywordGroup {
        name: "projects",
        keywords: &["project", "work"],
        reply: PROJECTS_REPLY,
    },
    KeywordGroup {
        name: "skills",
        keywords: &["skill", "technology"],
        reply: SKILLS_REPLY,
    },
    KeywordGroup {
        name: "experience",
        keywords: &["experience", "background"],
        reply: EXPERIENCE_REPLY,
    },
    KeywordGroup {
        name: "education",
        keywords: &["education", "study"],
        reply: EDUCATION_REPLY,
    },
    KeywordGroup {
        name: "contact",
        keywords: &["contact", "reach"],
        reply: CONTACT_REPLY,
    },
    KeywordGroup {
        name: "greeting",
        keywords: &["hello", "hi", "hey"],
        reply: GREETING_REPLY,
    },
];

/// Returns the first keyword group matching `message`, if any.
pub fn classify(message: &str) -> Option<&'static KeywordGroup> {
    let lowered = message.to_lowercase();
    KEYWORD_GROUPS.iter().find(|g| g.matches(&lowered))
}

/// Pure keyword responder: same input, same reply.
pub fn classify_and_reply(message: &str) -> &'static str {
    classify(message).map_or(FALLBACK_REPLY, |g| g.reply)
}
