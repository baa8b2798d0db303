// src/content.rs

//! Static portfolio content rendered by the section views.

use crate::constants::{AMBER, CYBER_PURPLE, EMERALD, GOLD, NEON_CYAN, NEON_PINK};
use ratatui::style::Color;

pub const OWNER_NAME: &str = "Priyanshu Sharma";
pub const CONTACT_EMAIL: &str = "buggatihttp@gmail.com";
pub const TAGLINE: &str = "\"Automating intelligence at scale\"";
pub const HERO_TITLES: [&str; 2] = ["Agentic AI Specialist", "GenAI+Ops Engineer"];
pub const EXPERIENCE_SUMMARY: &str = "1+ Years in AI/ML";

#[derive(Debug, Clone, Copy)]
pub struct SocialLink {
    pub label: &'static str,
    pub key: char,
    pub url: &'static str,
    pub color: Color,
}

pub const SOCIAL_LINKS: [SocialLink; 3] = [
    SocialLink {
        label: "GitHub",
        key: 'g',
        url: "https://github.com/priyanshu1230987/DEVOPS",
        color: NEON_CYAN,
    },
    SocialLink {
        label: "LinkedIn",
        key: 'l',
        url: "https://www.linkedin.com/in/priyanshu-sharma-124a42367/",
        color: NEON_PINK,
    },
    SocialLink {
        label: "HackerRank",
        key: 'h',
        url: "https://www.hackerrank.com/profile/buggatihttp",
        color: CYBER_PURPLE,
    },
];

pub fn social_link_for_key(key: char) -> Option<&'static SocialLink> {
    SOCIAL_LINKS.iter().find(|link| link.key == key)
}

#[derive(Debug, Clone, Copy)]
pub struct AboutCard {
    pub title: &'static str,
    pub body: &'static str,
}

pub const ABOUT_CARDS: [AboutCard; 3] = [
    AboutCard {
        title: "Who am I?",
        body: "I'm a passionate AI/ML enthusiast and GenAI+Ops Engineer who bridges the gap between cutting-edge AI research and scalable production systems. My journey began with a fascination for automation and has evolved into architecting intelligent systems that think, learn, and adapt.",
    },
    AboutCard {
        title: "Why AI + DevOps?",
        body: "The convergence of AI and DevOps represents the future of technology. I believe in creating self-healing, self-optimizing systems that not only deploy code but understand it, improve it, and evolve with it. It's about building the infrastructure for tomorrow's AI-first world.",
    },
    AboutCard {
        title: "Unique Value",
        body: "I don't just implement AI solutions; I architect intelligent ecosystems that anticipate needs, optimize themselves, and scale autonomously. My work combines the precision of DevOps with the creativity of AI to build systems that are truly futuristic.",
    },
];

#[derive(Debug, Clone, Copy)]
pub struct TimelineEvent {
    pub year: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const TIMELINE: [TimelineEvent; 4] = [
    TimelineEvent {
        year: "2023",
        title: "Started AI/ML Journey",
        description: "Began exploring machine learning and automation",
    },
    TimelineEvent {
        year: "2023",
        title: "DevOps Integration",
        description: "Specialized in cloud infrastructure and CI/CD",
    },
    TimelineEvent {
        year: "2024",
        title: "Agentic AI Focus",
        description: "Pioneered intelligent automation systems",
    },
    TimelineEvent {
        year: "2024",
        title: "GenAI+Ops Innovation",
        description: "Leading the future of AI-powered operations",
    },
];

#[derive(Debug, Clone, Copy)]
pub struct SkillCategory {
    pub title: &'static str,
    pub skills: [&'static str; 6],
    pub color: Color,
}

pub const SKILL_CATEGORIES: [SkillCategory; 6] = [
    SkillCategory {
        title: "Languages",
        skills: ["Python", "JavaScript", "TypeScript", "Bash", "Go", "SQL"],
        color: NEON_CYAN,
    },
    SkillCategory {
        title: "AI/ML Tools",
        skills: ["LangChain", "TensorFlow", "PyTorch", "Hugging Face", "OpenAI API", "Vertex AI"],
        color: NEON_PINK,
    },
    SkillCategory {
        title: "DevOps Tools",
        skills: ["Docker", "Kubernetes", "Jenkins", "GitHub Actions", "Terraform", "Ansible"],
        color: EMERALD,
    },
    SkillCategory {
        title: "Cloud & Infra",
        skills: ["AWS", "Azure", "GCP", "Linux", "Redis", "PostgreSQL"],
        color: AMBER,
    },
    SkillCategory {
        title: "Frameworks",
        skills: ["React", "Node.js", "FastAPI", "Django", "Express", "Next.js"],
        color: CYBER_PURPLE,
    },
    SkillCategory {
        title: "Specialties",
        skills: ["Prompt Engineering", "MLOps", "Agentic AI", "System Design", "Automation", "Scaling"],
        color: GOLD,
    },
];

pub const CORE_PHILOSOPHY: &str = "I believe in the convergence of AI and DevOps to create intelligent, self-managing systems. My expertise spans from low-level infrastructure automation to high-level AI model deployment, enabling me to build end-to-end solutions that are both scalable and intelligent.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectCategory {
    Ai,
    Devops,
}

#[derive(Debug, Clone, Copy)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub long_description: &'static str,
    pub tech_stack: &'static [&'static str],
    pub features: &'static [&'static str],
    pub category: ProjectCategory,
    pub color: Color,
}

pub const PROJECTS: [Project; 3] = [
    Project {
        id: 1,
        title: "AI-Powered DevOps Assistant",
        description: "An intelligent assistant that automatically optimizes CI/CD pipelines, predicts deployment failures, and suggests infrastructure improvements using advanced ML models.",
        long_description: "This revolutionary system combines machine learning with DevOps practices to create a self-optimizing deployment pipeline. It analyzes historical deployment data, monitors system performance, and proactively suggests improvements before issues occur.",
        tech_stack: &["Python", "TensorFlow", "Docker", "Kubernetes", "FastAPI"],
        features: &["Predictive Analytics", "Auto-scaling", "Performance Monitoring", "Intelligent Alerts"],
        category: ProjectCategory::Ai,
        color: NEON_CYAN,
    },
    Project {
        id: 2,
        title: "Agentic Infrastructure Orchestrator",
        description: "A self-healing infrastructure system that uses agentic AI to monitor, diagnose, and automatically resolve system issues while scaling resources based on predictive analysis.",
        long_description: "Built with autonomous agents that can make intelligent decisions about infrastructure management. The system learns from past incidents and continuously improves its response strategies.",
        tech_stack: &["Go", "Python", "AWS", "Terraform", "LangChain"],
        features: &["Self-healing", "Predictive Scaling", "Cost Optimization", "Multi-cloud Support"],
        category: ProjectCategory::Devops,
        color: NEON_PINK,
    },
    Project {
        id: 3,
        title: "GenAI Code Review Agent",
        description: "An intelligent code review system that understands context, suggests optimizations, identifies potential bugs, and ensures code quality using advanced language models.",
        long_description: "This AI-powered code reviewer goes beyond traditional static analysis by understanding code context, business logic, and providing human-like feedback with actionable suggestions.",
        tech_stack: &["Node.js", "OpenAI API", "GitHub Actions", "TypeScript", "PostgreSQL"],
        features: &["Context-aware Analysis", "Security Scanning", "Performance Optimization", "Learning from Feedback"],
        category: ProjectCategory::Ai,
        color: EMERALD,
    },
];

#[derive(Debug, Clone, Copy)]
pub struct ContactStat {
    pub label: &'static str,
    pub value: &'static str,
}

pub const CONTACT_STATS: [ContactStat; 3] = [
    ContactStat {
        label: "Response Time",
        value: "< 24 hours",
    },
    ContactStat {
        label: "Projects Completed",
        value: "50+",
    },
    ContactStat {
        label: "Client Satisfaction",
        value: "100%",
    },
];

/// Time-of-day greeting shown on the home screen.
pub fn greeting_for_hour(hour: u32) -> &'static str {
    if hour < 12 {
        "Good Morning"
    } else if hour < 17 {
        "Good Afternoon"
    } else {
        "Good Evening"
    }
}
