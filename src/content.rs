#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Service {
    pub glyph: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Project {
    pub title: &'static str,
    pub category: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Technology {
    pub name: &'static str,
    pub icon: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Step {
    pub step: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

/// One card in the about panel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Highlight {
    pub glyph: &'static str,
    pub label: &'static str,
    pub value: &'static str,
}

pub const SERVICES: &[Service] = &[
    Service {
        glyph: "🧠",
        title: "Agentic AI & Autonomous Systems",
        description: "Multi-agent systems using AutoGen, CrewAI, and LangGraph that coordinate complex business operations with minimal human oversight.",
    },
    Service {
        glyph: "🔌",
        title: "Advanced RAG & Knowledge Systems",
        description: "Retrieval-Augmented Generation systems that ground LLMs in your actual data for accurate, contextual intelligence.",
    },
    Service {
        glyph: "🌐",
        title: "Multimodal AI & Sensory Intelligence",
        description: "Systems that process text, images, audio, and video simultaneously for richer context awareness.",
    },
    Service {
        glyph: "✨",
        title: "Generative AI & LLM Engineering",
        description: "Production-grade generative systems with fine-tuned domain models and prompt optimization.",
    },
    Service {
        glyph: "👁",
        title: "Predictive Intelligence & Analytics",
        description: "Transform data into foresight with predictive maintenance and dynamic pricing algorithms.",
    },
    Service {
        glyph: "🧱",
        title: "Full-Stack Software Engineering",
        description: "Robust backends, APIs, and cloud architectures that power AI at scale.",
    },
];

pub const PORTFOLIO: &[Project] = &[
    Project {
        title: "Agentic Workflow Orchestrator",
        category: "Enterprise Intelligence",
        description: "Multi-agent system coordinating procurement, finance, and operations, reducing processing time by 70%.",
    },
    Project {
        title: "Meta-RAG Knowledge Platform",
        category: "Enterprise Intelligence",
        description: "Enterprise search system processing 10M+ documents with 95% accuracy in answers.",
    },
    Project {
        title: "Healthcare Diagnostic Assistant",
        category: "Industry-Specific AI",
        description: "AI analyzing medical imaging, lab results, and patient history for preliminary diagnoses.",
    },
    Project {
        title: "Precision Agriculture Drone Controller",
        category: "Industry-Specific AI",
        description: "Multimodal AI guiding autonomous drones improving yields by 25%.",
    },
];

pub const TECHNOLOGIES: &[Technology] = &[
    Technology { name: "LangChain", icon: "🔗" },
    Technology { name: "LangGraph", icon: "📊" },
    Technology { name: "AutoGen", icon: "🤖" },
    Technology { name: "CrewAI", icon: "👥" },
    Technology { name: "LlamaIndex", icon: "📚" },
    Technology { name: "GPT-4V", icon: "💬" },
    Technology { name: "Claude 3", icon: "🧠" },
    Technology { name: "Gemini", icon: "✨" },
    Technology { name: "Pinecone", icon: "🌲" },
    Technology { name: "Weaviate", icon: "🌀" },
    Technology { name: "AWS", icon: "☁️" },
    Technology { name: "Azure", icon: "🌐" },
    Technology { name: "GCP", icon: "🔵" },
    Technology { name: "Kubernetes", icon: "📦" },
];

pub const PROCESS: &[Step] = &[
    Step {
        step: "01",
        title: "Discovery",
        description: "Deep dive into your business context and identify high-impact AI opportunities.",
    },
    Step {
        step: "02",
        title: "Strategy",
        description: "Architect solutions balancing innovation with pragmatism.",
    },
    Step {
        step: "03",
        title: "Development",
        description: "Agile sprints with continuous validation and rigorous testing.",
    },
    Step {
        step: "04",
        title: "Deployment",
        description: "Production-grade infrastructure with monitoring and security.",
    },
    Step {
        step: "05",
        title: "Evolution",
        description: "AI systems that improve over time through feedback and new data.",
    },
];

pub const STATS: &[Stat] = &[
    Stat { value: "50+", label: "Global Clients" },
    Stat { value: "100+", label: "Projects Delivered" },
    Stat { value: "Since 2020", label: "Industry Experience" },
];

pub const WHY_US: &[Service] = &[
    Service {
        glyph: "⚡",
        title: "Autonomous Intelligence",
        description: "AI agents that handle complex workflows independently, coordinating across systems in real-time.",
    },
    Service {
        glyph: "🎯",
        title: "Domain-Specific Excellence",
        description: "Vertical AI solutions trained on industry data, delivering precision where generic models fail.",
    },
    Service {
        glyph: "🛡",
        title: "Future-Proof Architecture",
        description: "Systems built on open standards and interoperable frameworks that adapt as technology evolves.",
    },
    Service {
        glyph: "🏆",
        title: "Measurable ROI",
        description: "Solutions engineered for business outcomes, not just technical impressiveness.",
    },
];

pub const HIGHLIGHTS: &[Highlight] = &[
    Highlight { glyph: "🧠", label: "AI Agents", value: "Production-Ready" },
    Highlight { glyph: "🔌", label: "RAG Systems", value: "95% Accuracy" },
    Highlight { glyph: "🌐", label: "Multimodal", value: "Real-Time" },
    Highlight { glyph: "✨", label: "Generative", value: "Enterprise-Grade" },
];

pub const LOCATION: &str = "Karachi, Pakistan";
pub const CONTACT_NOTE: &str = "Contact: Updating Soon";

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn tables_have_expected_sizes() {
        assert_eq!(SERVICES.len(), 6);
        assert_eq!(PORTFOLIO.len(), 4);
        assert_eq!(TECHNOLOGIES.len(), 14);
        assert_eq!(PROCESS.len(), 5);
        assert_eq!(STATS.len(), 3);
        assert_eq!(WHY_US.len(), 4);
        assert_eq!(HIGHLIGHTS.len(), 4);
    }

    #[test]
    fn process_steps_are_numbered_in_order() {
        for (i, step) in PROCESS.iter().enumerate() {
            assert_eq!(step.step, format!("{:02}", i + 1));
        }
    }

    // Titles double as render keys.
    #[test]
    fn titles_are_unique() {
        let services: HashSet<_> = SERVICES.iter().chain(WHY_US).map(|s| s.title).collect();
        assert_eq!(services.len(), SERVICES.len() + WHY_US.len());

        let projects: HashSet<_> = PORTFOLIO.iter().map(|p| p.title).collect();
        assert_eq!(projects.len(), PORTFOLIO.len());

        let techs: HashSet<_> = TECHNOLOGIES.iter().map(|t| t.name).collect();
        assert_eq!(techs.len(), TECHNOLOGIES.len());
    }
}
