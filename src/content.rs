//! Static display data for every section of the page.

pub const OWNER: &str = "Sourav Das";
pub const EMAIL: &str = "souravdas5670@gmail.com";
pub const PHONE: &str = "+91 98315 60836";
pub const LOCATION: &str = "Kolkata, India";
pub const LINKEDIN_URL: &str = "https://www.linkedin.com/in/sourav-das-20032a2a7";
pub const RESUME_PATH: &str = "/resume.pdf";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub name: &'static str,
    pub href: &'static str,
}

pub static NAV_ITEMS: [NavItem; 5] = [
    NavItem { name: "Home", href: "#home" },
    NavItem { name: "About", href: "#about" },
    NavItem { name: "Projects", href: "#projects" },
    NavItem { name: "Skills", href: "#skills" },
    NavItem { name: "Contact", href: "#contact" },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactInfo {
    pub icon: &'static str,
    pub title: &'static str,
    pub value: &'static str,
    pub link: &'static str,
}

pub static CONTACT_INFO: [ContactInfo; 4] = [
    ContactInfo {
        icon: "ri-mail-line",
        title: "Email",
        value: EMAIL,
        link: "mailto:souravdas5670@gmail.com",
    },
    ContactInfo {
        icon: "ri-phone-line",
        title: "Phone",
        value: PHONE,
        link: "tel:+919831560836",
    },
    ContactInfo {
        icon: "ri-map-pin-line",
        title: "Location",
        value: LOCATION,
        link: "https://maps.google.com",
    },
    ContactInfo {
        icon: "ri-linkedin-line",
        title: "LinkedIn",
        value: "linkedin.com/in/sourav-das-20032a2a7",
        link: LINKEDIN_URL,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub icon: &'static str,
    pub url: &'static str,
    pub label: &'static str,
}

pub static CONTACT_SOCIALS: [SocialLink; 4] = [
    SocialLink { icon: "ri-github-fill", url: "https://github.com", label: "GitHub" },
    SocialLink { icon: "ri-linkedin-fill", url: "https://linkedin.com", label: "LinkedIn" },
    SocialLink { icon: "ri-twitter-fill", url: "https://twitter.com", label: "Twitter" },
    SocialLink { icon: "ri-instagram-line", url: "https://instagram.com", label: "Instagram" },
];

pub static FOOTER_SOCIALS: [SocialLink; 4] = [
    SocialLink { icon: "ri-github-fill", url: "https://github.com", label: "GitHub" },
    SocialLink { icon: "ri-linkedin-fill", url: LINKEDIN_URL, label: "LinkedIn" },
    SocialLink { icon: "ri-twitter-fill", url: "https://twitter.com", label: "Twitter" },
    SocialLink { icon: "ri-mail-fill", url: "mailto:souravdas5670@gmail.com", label: "Email" },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Backend,
    AiMl,
}

impl Category {
    pub fn label(self) -> &'static str {
        match self {
            Self::Backend => "Backend",
            Self::AiMl => "AI/ML",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProjectFilter {
    #[default]
    All,
    Backend,
    Ai,
}

impl ProjectFilter {
    pub const ALL: [ProjectFilter; 3] = [Self::All, Self::Backend, Self::Ai];

    pub fn id(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Backend => "backend",
            Self::Ai => "ai",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All Projects",
            Self::Backend => "Backend",
            Self::Ai => "AI/ML",
        }
    }

    pub fn matches(self, category: Category) -> bool {
        match self {
            Self::All => true,
            Self::Backend => category == Category::Backend,
            Self::Ai => category == Category::AiMl,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub technologies: &'static [&'static str],
    pub image: &'static str,
    pub category: Category,
    pub features: &'static [&'static str],
    pub github_url: &'static str,
    pub live_url: &'static str,
}

pub static PROJECTS: [Project; 4] = [
    Project {
        id: 1,
        title: "Gradelytics - Student Performance Tracker",
        description: "Comprehensive desktop application for educators to analyze and predict student academic performance with intelligent forecasting using regression algorithms.",
        technologies: &["Java", "Swing", "MySQL", "JDBC", "JFreeChart"],
        image: "https://readdy.ai/api/search-image?query=Educational%20analytics%20dashboard%20with%20charts%20graphs%20student%20performance%20tracking%20interface%20modern%20desktop%20application%20clean%20professional%20design%20blue%20color%20scheme%20data%20visualization%20academic%20metrics&width=600&height=400&seq=gradelytics-1&orientation=landscape",
        category: Category::Backend,
        features: &[
            "Student performance analysis",
            "Predictive forecasting with regression",
            "Data visualization with charts",
            "Database integration for student data",
        ],
        github_url: "https://github.com/sour698/gradelytics.git",
        live_url: "https://demo.com",
    },
    Project {
        id: 2,
        title: "Finotex-Bank Management System",
        description: "Desktop banking software for managing personal accounts, transactions, and banking operations with secure data handling and interactive form-based UI.",
        technologies: &["Java", "Swing", "MySQL", "JDBC"],
        image: "https://readdy.ai/api/search-image?query=Bank%20management%20system%20desktop%20application%20interface%20modern%20banking%20software%20clean%20professional%20design%20secure%20transaction%20handling%20account%20management%20dark%20blue%20green%20color%20scheme%20financial%20dashboard&width=600&height=400&seq=finotex-bank-1&orientation=landscape",
        category: Category::Backend,
        features: &[
            "Personal account management",
            "Secure transaction processing",
            "Interactive form-based UI",
            "Real-world banking simulation",
        ],
        github_url: "https://github.com/sour698/finotex.git",
        live_url: "https://demo.com",
    },
    Project {
        id: 3,
        title: "SkyTalk - AI-Powered Weather App",
        description: "Dynamic web application combining real-time weather updates with interactive AI chatbot for engaging user experience and conversational weather assistance.",
        technologies: &["HTML", "CSS", "JavaScript", "OpenWeatherMap API", "Gemini AI API"],
        image: "https://readdy.ai/api/search-image?query=Weather%20application%20interface%20with%20AI%20chatbot%20modern%20web%20design%20clean%20blue%20sky%20theme%20real-time%20weather%20dashboard%20interactive%20chat%20interface%20responsive%20design%20weather%20forecast&width=600&height=400&seq=skytalk-1&orientation=landscape",
        category: Category::AiMl,
        features: &[
            "Real-time weather dashboard",
            "Interactive AI chatbot",
            "Clean responsive UI",
            "Conversational weather assistance",
        ],
        github_url: "https://github.com/sour698/Skytalk_weather.git",
        live_url: "https://demo.com",
    },
    Project {
        id: 4,
        title: "Arix - AI PDF Chatbot",
        description: "Smart chatbot allowing users to upload PDFs and interact with content via natural language using Google Gemini API for contextual document analysis.",
        technologies: &["React", "TypeScript", "Gemini API", "Tailwind CSS", "Framer Motion"],
        image: "https://readdy.ai/api/search-image?query=AI%20PDF%20chatbot%20interface%20modern%20React%20application%20document%20analysis%20smart%20conversation%20TypeScript%20clean%20design%20purple%20blue%20gradient%20PDF%20upload%20interactive%20chat%20natural%20language%20processing&width=600&height=400&seq=arix-1&orientation=landscape",
        category: Category::AiMl,
        features: &[
            "PDF document upload",
            "Natural language interaction",
            "Contextual AI responses",
            "Smart document analysis",
        ],
        github_url: "https://github.com/sour698/arix.git",
        live_url: "https://demo.com",
    },
];

/// Projects visible under `filter`, in listing order.
pub fn filter_projects(projects: &[Project], filter: ProjectFilter) -> Vec<Project> {
    projects
        .iter()
        .filter(|p| filter.matches(p.category))
        .copied()
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    /// Proficiency in percent.
    pub level: u8,
    pub icon: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillCategory {
    pub category: &'static str,
    pub skills: &'static [Skill],
}

pub static SKILLS: [SkillCategory; 3] = [
    SkillCategory {
        category: "Backend Development",
        skills: &[
            Skill { name: "Java", level: 90, icon: "ri-code-s-slash-line" },
            Skill { name: "Spring Boot", level: 85, icon: "ri-leaf-line" },
            Skill { name: "Node.js", level: 88, icon: "ri-nodejs-line" },
            Skill { name: "Python", level: 80, icon: "ri-code-line" },
            Skill { name: "MySQL", level: 85, icon: "ri-database-2-line" },
            Skill { name: "MongoDB", level: 75, icon: "ri-database-line" },
        ],
    },
    SkillCategory {
        category: "Frontend Development",
        skills: &[
            Skill { name: "JavaScript", level: 85, icon: "ri-javascript-line" },
            Skill { name: "React", level: 80, icon: "ri-reactjs-line" },
            Skill { name: "HTML/CSS", level: 88, icon: "ri-html5-line" },
            Skill { name: "TypeScript", level: 75, icon: "ri-code-s-slash-line" },
            Skill { name: "Tailwind CSS", level: 85, icon: "ri-css3-line" },
        ],
    },
    SkillCategory {
        category: "AI/ML & Tools",
        skills: &[
            Skill { name: "Machine Learning", level: 70, icon: "ri-brain-line" },
            Skill { name: "TensorFlow", level: 65, icon: "ri-cpu-line" },
            Skill { name: "Git", level: 90, icon: "ri-git-branch-line" },
            Skill { name: "Docker", level: 70, icon: "ri-container-line" },
            Skill { name: "AWS", level: 60, icon: "ri-cloud-line" },
            Skill { name: "Linux", level: 80, icon: "ri-terminal-line" },
        ],
    },
];

pub static ADDITIONAL_EXPERTISE: [&str; 8] = [
    "REST APIs",
    "Microservices",
    "System Design",
    "Data Structures",
    "Algorithms",
    "Software Architecture",
    "Agile Development",
    "Testing",
];

/// Fixed `(left%, top%)` particle positions so server and client markup agree.
pub static PARTICLE_POSITIONS: [(f64, f64); 15] = [
    (15.5, 25.3),
    (45.2, 68.1),
    (72.8, 12.5),
    (25.6, 85.2),
    (88.3, 45.7),
    (52.1, 32.4),
    (33.7, 76.8),
    (67.9, 58.6),
    (12.4, 42.3),
    (85.6, 18.9),
    (41.2, 64.5),
    (76.3, 38.7),
    (28.9, 72.1),
    (59.4, 15.8),
    (81.7, 91.2),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_all_keeps_order() {
        let all = filter_projects(&PROJECTS, ProjectFilter::All);
        let ids: Vec<u32> = all.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_filter_backend_yields_java_swing_projects() {
        let backend = filter_projects(&PROJECTS, ProjectFilter::Backend);
        assert_eq!(backend.len(), 2);
        for project in &backend {
            assert!(project.technologies.contains(&"Java"));
            assert!(project.technologies.contains(&"Swing"));
        }
        assert!(backend[0].title.starts_with("Gradelytics"));
        assert!(backend[1].title.starts_with("Finotex"));
    }

    #[test]
    fn test_filter_ai() {
        let ai = filter_projects(&PROJECTS, ProjectFilter::Ai);
        let ids: Vec<u32> = ai.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![3, 4]);
        assert!(ai.iter().all(|p| p.category.label() == "AI/ML"));
    }

    #[test]
    fn test_filter_ids_and_labels() {
        let ids: Vec<&str> = ProjectFilter::ALL.iter().map(|f| f.id()).collect();
        assert_eq!(ids, vec!["all", "backend", "ai"]);
        assert_eq!(ProjectFilter::default(), ProjectFilter::All);
        assert_eq!(ProjectFilter::All.label(), "All Projects");
    }

    #[test]
    fn test_skill_levels_are_percentages() {
        assert!(SKILLS
            .iter()
            .flat_map(|c| c.skills.iter())
            .all(|s| s.level <= 100));
        let counts: Vec<usize> = SKILLS.iter().map(|c| c.skills.len()).collect();
        assert_eq!(counts, vec![6, 5, 6]);
    }

    #[test]
    fn test_nav_targets_are_anchors() {
        assert!(NAV_ITEMS.iter().all(|n| n.href.starts_with('#')));
        assert_eq!(NAV_ITEMS[0].href, "#home");
    }
}
