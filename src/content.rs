//! Static content driving the portfolio page: outbound links, featured
//! projects, work experience, and skill groups.
//!
//! Everything here is compile-time data. The section components iterate
//! these collections to produce the page, and collection order is display
//! order. Nothing mutates these records after process start.

/// Named external links shown in the nav, hero, and contact sections.
pub struct LinkSet {
    pub resume: &'static str,
    pub github: &'static str,
    pub linkedin: &'static str,
    pub email: &'static str,
}

pub struct ProjectLinks {
    pub demo: Option<&'static str>,
    pub code: Option<&'static str>,
}

/// One featured project card. `title` doubles as the list key.
pub struct Project {
    pub title: &'static str,
    pub blurb: &'static str,
    pub impact: &'static [&'static str],
    pub tags: &'static [&'static str],
    pub links: ProjectLinks,
    /// Screenshot or video for the card header. None of the current
    /// projects ship media yet; the card renders a gradient panel instead.
    pub media: Option<&'static str>,
}

/// One timeline entry. `org` doubles as the list key.
pub struct ExperienceEntry {
    pub org: &'static str,
    pub role: &'static str,
    pub time: &'static str,
    pub bullets: &'static [&'static str],
    pub logo_src: Option<&'static str>,
}

pub struct SkillGroup {
    pub group: &'static str,
    pub items: &'static [&'static str],
}

pub const LINKS: LinkSet = LinkSet {
    resume: "/resume.pdf",
    github: "https://github.com/avinashpush",
    linkedin: "https://www.linkedin.com/in/avinashpushparaj/",
    email: "mailto:avi.pushparaj7@gmail.com",
};

pub static PROJECTS: &[Project] = &[
    Project {
        title: "BallKnowledgeCrew",
        blurb: "End-to-end player prop analytics platform delivering daily forecasts; engineered data ingestion, matchup metrics, and backtesting.",
        impact: &["70% hit rate", "100+ Discord community", "50K TikTok views"],
        tags: &["Python", "Pandas", "XGBoost", "Backtesting", "APIs"],
        links: ProjectLinks {
            demo: Some("#"),
            code: Some("#"),
        },
        media: None,
    },
    Project {
        title: "CheffUp iOS App",
        blurb: "SwiftUI app for friend-based meal sharing with lock-to-post flows and calendar history; Firebase backend with timezone FCM reminders.",
        impact: &["Serverless Firebase", "Real-time feed", "Per-user notifications"],
        tags: &["SwiftUI", "Firebase", "FCM", "MVVM"],
        links: ProjectLinks {
            demo: Some("#"),
            code: Some("#"),
        },
        media: None,
    },
    Project {
        title: "Real-Time Stock Dashboard",
        blurb: "Streamlit dashboard reading Yahoo Finance API, computing SMA/EMA, and rendering interactive multi-timeframe charts.",
        impact: &["Tech indicators", "Interactive charts"],
        tags: &["Python", "Streamlit", "Plotly", "Yahoo Finance API"],
        links: ProjectLinks {
            demo: Some("#"),
            code: Some("https://github.com/avinashpush/Stock-Dashboard"),
        },
        media: None,
    },
];

pub static EXPERIENCE: &[ExperienceEntry] = &[
    ExperienceEntry {
        org: "Barclays",
        role: "Software Engineering Intern – Security & Encryption",
        time: "Jun 2025 – Aug 2025",
        bullets: &[
            "Designed secure RESTful APIs for key management (Spring Boot, Java).",
            "Owned backend lifecycle; provisioning, DTOs, dynamic filtering; CI/CD via Jenkins; deployed on OpenShift.",
        ],
        logo_src: Some("/logos/barclays.png"),
    },
    ExperienceEntry {
        org: "SuperAnnotate",
        role: "AI Data Trainer",
        time: "Apr 2024 – Jul 2024",
        bullets: &[
            "Crafted 50+ prompts; improved LLM training efficiency by 15%.",
            "Evaluated 100+ AI responses to improve accuracy across contexts.",
        ],
        logo_src: Some("/logos/superannotate.png"),
    },
    ExperienceEntry {
        org: "The Cell Theatre",
        role: "Software Engineer",
        time: "Mar 2024 – Jun 2024",
        bullets: &[
            "Automated extraction/organization of 650+ contacts using Python (pandas, regex).",
            "Built Airtable CRM; reduced processing time by 80%.",
        ],
        logo_src: Some("/logos/celltheatre.png"),
    },
];

pub static SKILLS: &[SkillGroup] = &[
    SkillGroup {
        group: "Languages",
        items: &["Python", "Java", "C++", "R", "SQL", "JavaScript", "TypeScript"],
    },
    SkillGroup {
        group: "Frameworks & Libraries",
        items: &[
            "Spring Boot",
            "React",
            "Node.js",
            "Django",
            "Flask",
            "TensorFlow",
            "PyTorch",
            "scikit-learn",
            "pandas",
            "NumPy",
        ],
    },
    SkillGroup {
        group: "Tools & Cloud",
        items: &["Git", "AWS", "Jenkins", "OpenShift", "REST APIs", "MySQL"],
    },
];

// Skills without a devicon glyph (e.g. "REST APIs", "OpenShift") are left
// unmapped and render the placeholder tile.
const ICON_MAP: &[(&str, &str)] = &[
    // Languages
    ("Python", "devicon-python-plain"),
    ("Java", "devicon-java-plain"),
    ("C++", "devicon-cplusplus-plain"),
    ("R", "devicon-r-plain"),
    ("SQL", "devicon-mysql-plain"),
    ("JavaScript", "devicon-javascript-plain"),
    ("TypeScript", "devicon-typescript-plain"),
    // Frameworks & Libraries
    ("Spring Boot", "devicon-spring-plain"),
    ("React", "devicon-react-original"),
    ("Node.js", "devicon-nodejs-plain"),
    ("Django", "devicon-django-plain"),
    ("Flask", "devicon-flask-original"),
    ("TensorFlow", "devicon-tensorflow-original"),
    ("PyTorch", "devicon-pytorch-original"),
    ("scikit-learn", "devicon-scikitlearn-plain"),
    ("pandas", "devicon-pandas-original"),
    ("NumPy", "devicon-numpy-original"),
    // Tools & Cloud
    ("Git", "devicon-git-plain"),
    ("AWS", "devicon-amazonwebservices-plain-wordmark"),
    ("Jenkins", "devicon-jenkins-plain"),
    ("MySQL", "devicon-mysql-plain"),
];

/// Resolve a skill name to its devicon icon-font class.
///
/// A miss is an expected outcome, not an error; callers render a
/// placeholder tile instead.
pub fn icon_for(skill: &str) -> Option<&'static str> {
    ICON_MAP
        .iter()
        .find(|(name, _)| *name == skill)
        .map(|(_, class)| *class)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn project_titles_are_unique() {
        let titles: HashSet<_> = PROJECTS.iter().map(|p| p.title).collect();
        assert_eq!(titles.len(), PROJECTS.len());
    }

    #[test]
    fn experience_orgs_are_unique() {
        let orgs: HashSet<_> = EXPERIENCE.iter().map(|e| e.org).collect();
        assert_eq!(orgs.len(), EXPERIENCE.len());
    }

    #[test]
    fn skill_group_labels_are_unique() {
        let groups: HashSet<_> = SKILLS.iter().map(|g| g.group).collect();
        assert_eq!(groups.len(), SKILLS.len());
    }

    #[test]
    fn link_set_values_are_uris() {
        for link in [LINKS.github, LINKS.linkedin] {
            assert!(link.starts_with("https://"), "not a URL: {link}");
        }
        assert!(LINKS.email.starts_with("mailto:"));
        assert!(LINKS.resume.starts_with('/'));
    }

    #[test]
    fn mapped_skills_resolve_to_devicon_classes() {
        for group in SKILLS {
            for skill in group.items {
                if let Some(class) = icon_for(skill) {
                    assert!(class.starts_with("devicon-"), "{skill} -> {class}");
                }
            }
        }
        assert_eq!(icon_for("Python"), Some("devicon-python-plain"));
    }

    #[test]
    fn unknown_skills_miss_the_icon_map() {
        assert_eq!(icon_for("REST APIs"), None);
        assert_eq!(icon_for("OpenShift"), None);
        assert_eq!(icon_for("COBOL"), None);
    }

    #[test]
    fn project_media_is_not_populated_yet() {
        assert!(PROJECTS.iter().all(|p| p.media.is_none()));
    }
}
