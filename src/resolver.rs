// src/resolver.rs

//! Keyword-driven reply selection for the assistant panel.
//!
//! Matching is a plain substring test on the lowercased input, so `"hi"` also
//! matches `"this"`. Rules are tried in table order and the first hit wins.

use serde::{Deserialize, Serialize};

/// One entry of the keyword table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordRule {
    pub keyword: String,
    pub response: String,
}

impl KeywordRule {
    /// Keywords are stored lowercase since inputs are lowercased before matching.
    pub fn new(keyword: impl Into<String>, response: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into().to_lowercase(),
            response: response.into(),
        }
    }
}

pub const AI_TOPIC_TERMS: [&str; 2] = ["ai", "artificial intelligence"];
pub const DEVOPS_TOPIC_TERM: &str = "devops";

pub const AI_TOPIC_REPLY: &str = "Priyanshu is passionate about Agentic AI and GenAI+Ops! 🤖 He creates intelligent systems that can think, learn, and adapt autonomously. His work focuses on building AI-powered infrastructure that can self-heal and optimize. Pretty cool, right?";
pub const DEVOPS_TOPIC_REPLY: &str = "Priyanshu combines DevOps practices with AI to create next-generation infrastructure! 🔧 He specializes in CI/CD automation, container orchestration, and cloud-native solutions that leverage machine learning for optimization. It's the future of tech!";
pub const FALLBACK_REPLY: &str = "That's an interesting question! 🤔 While I can provide information about Priyanshu's skills, projects, and experience, I'd recommend reaching out to him directly at buggatihttp@gmail.com for more detailed discussions. He loves talking about AI and DevOps!";

pub const GREETING: &str = "Hello there! 🤖 I'm Priyanshu's AI assistant. I'm here to help you navigate through his amazing portfolio and answer any questions about his work in AI/ML and DevOps. What would you like to know?";

/// The built-in keyword table, in matching order.
pub fn default_rules() -> Vec<KeywordRule> {
    vec![
        KeywordRule::new(
            "skills",
            "Priyanshu specializes in AI/ML, Python, JavaScript, Docker, Kubernetes, AWS, and many other cutting-edge technologies. He's particularly skilled in creating intelligent automation systems and GenAI+Ops solutions! 🚀",
        ),
        KeywordRule::new(
            "projects",
            "His featured projects include an AI-Powered DevOps Assistant, Agentic Infrastructure Orchestrator, and GenAI Code Review Agent. Each project showcases his expertise in combining AI with DevOps practices! 💡",
        ),
        KeywordRule::new(
            "experience",
            "Priyanshu has 1+ years of focused experience in AI/ML, with expertise in building intelligent, self-managing systems that bridge AI research and production deployment. 🎯",
        ),
        KeywordRule::new(
            "contact",
            "You can reach Priyanshu at buggatihttp@gmail.com. He's currently available for exciting projects and collaborations! 📧",
        ),
        KeywordRule::new(
            "location",
            "Priyanshu is based in India but works with clients globally across different time zones. Distance is no barrier to great collaboration! 🌍",
        ),
        KeywordRule::new(
            "hello",
            "Hello! Great to meet you! 👋 I'm here to help you learn more about Priyanshu's incredible work in AI and DevOps. What sparks your curiosity?",
        ),
        KeywordRule::new(
            "hi",
            "Hi there! 😊 I'm Priyanshu's friendly AI assistant. Feel free to ask me anything about his skills, projects, or experience!",
        ),
    ]
}

/// Which branch of the resolver produced a reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    Keyword(usize),
    AiTopic,
    DevopsTopic,
    Fallback,
}

#[derive(Debug, Clone)]
pub struct ResponseResolver {
    rules: Vec<KeywordRule>,
    ai_reply: String,
    devops_reply: String,
    fallback_reply: String,
}

impl Default for ResponseResolver {
    fn default() -> Self {
        Self::new(default_rules())
    }
}

impl ResponseResolver {
    /// Builds a resolver over `rules` with the built-in topical and fallback replies.
    pub fn new(rules: Vec<KeywordRule>) -> Self {
        Self {
            rules,
            ai_reply: AI_TOPIC_REPLY.to_string(),
            devops_reply: DEVOPS_TOPIC_REPLY.to_string(),
            fallback_reply: FALLBACK_REPLY.to_string(),
        }
    }

    /// Uses the configured table when one is given, the built-in table otherwise.
    pub fn from_rules(rules: Option<&[KeywordRule]>) -> Self {
        match rules {
            Some(rules) if !rules.is_empty() => Self::new(
                rules
                    .iter()
                    .map(|r| KeywordRule::new(r.keyword.clone(), r.response.clone()))
                    .collect(),
            ),
            _ => Self::default(),
        }
    }

    pub fn rules(&self) -> &[KeywordRule] {
        &self.rules
    }

    /// Classifies `input` without producing the reply text.
    pub fn classify(&self, input: &str) -> MatchKind {
        let lowered = input.to_lowercase();

        if let Some(idx) = self
            .rules
            .iter()
            .position(|rule| lowered.contains(rule.keyword.as_str()))
        {
            return MatchKind::Keyword(idx);
        }

        if AI_TOPIC_TERMS.iter().any(|term| lowered.contains(term)) {
            return MatchKind::AiTopic;
        }

        if lowered.contains(DEVOPS_TOPIC_TERM) {
            return MatchKind::DevopsTopic;
        }

        MatchKind::Fallback
    }

    /// Returns exactly one reply for `input`. Never fails.
    pub fn resolve(&self, input: &str) -> &str {
        match self.classify(input) {
            MatchKind::Keyword(idx) => &self.rules[idx].response,
            MatchKind::AiTopic => &self.ai_reply,
            MatchKind::DevopsTopic => &self.devops_reply,
            MatchKind::Fallback => &self.fallback_reply,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reply_for(keyword: &str) -> String {
        default_rules()
            .into_iter()
            .find(|r| r.keyword == keyword)
            .map(|r| r.response)
            .unwrap()
    }

    #[test]
    fn test_skills_question_hits_skills_rule() {
        let resolver = ResponseResolver::default();
        assert_eq!(resolver.resolve("What are your skills?"), reply_for("skills"));
    }

    #[test]
    fn test_experience_rule() {
        let resolver = ResponseResolver::default();
        assert_eq!(
            resolver.resolve("tell me about your experience"),
            reply_for("experience")
        );
    }

    #[test]
    fn test_unmatched_input_gets_fallback_with_email() {
        let resolver = ResponseResolver::default();
        let reply = resolver.resolve("xyz123");
        assert_eq!(reply, FALLBACK_REPLY);
        assert!(reply.contains("buggatihttp@gmail.com"));
    }

    #[test]
    fn test_ai_checked_before_devops() {
        let resolver = ResponseResolver::default();
        assert_eq!(resolver.resolve("I love AI and devops"), AI_TOPIC_REPLY);
    }

    #[test]
    fn test_devops_topic() {
        let resolver = ResponseResolver::default();
        assert_eq!(resolver.resolve("DevOps pipelines?"), DEVOPS_TOPIC_REPLY);
    }

    #[test]
    fn test_artificial_intelligence_phrase() {
        let resolver = ResponseResolver::default();
        assert_eq!(resolver.classify("Artificial Intelligence"), MatchKind::AiTopic);
    }

    #[test]
    fn test_first_rule_in_table_order_wins() {
        let resolver = ResponseResolver::default();
        // "projects" precedes "contact" in the table.
        assert_eq!(
            resolver.resolve("contact me about projects"),
            reply_for("projects")
        );
    }

    #[test]
    fn test_substring_match_is_not_word_bounded() {
        let resolver = ResponseResolver::default();
        // "this" contains "hi".
        assert_eq!(resolver.resolve("what is this"), reply_for("hi"));
    }

    #[test]
    fn test_keyword_beats_topic_terms() {
        let resolver = ResponseResolver::default();
        assert_eq!(resolver.resolve("devops skills"), reply_for("skills"));
    }

    #[test]
    fn test_resolution_is_case_insensitive_and_stable() {
        let resolver = ResponseResolver::default();
        let first = resolver.resolve("HELLO").to_string();
        let second = resolver.resolve("hello").to_string();
        assert_eq!(first, second);
        assert_eq!(resolver.rules().len(), default_rules().len());
    }

    #[test]
    fn test_configured_rules_replace_builtin_table() {
        let custom = vec![KeywordRule {
            keyword: "Rust".to_string(),
            response: "Rust is great".to_string(),
        }];
        let resolver = ResponseResolver::from_rules(Some(&custom));
        assert_eq!(resolver.resolve("do you know rust?"), "Rust is great");
        assert_eq!(resolver.resolve("skills"), FALLBACK_REPLY);
    }

    #[test]
    fn test_empty_configured_rules_fall_back_to_builtin() {
        let resolver = ResponseResolver::from_rules(Some(&[]));
        assert_eq!(resolver.rules(), default_rules().as_slice());
    }
}
