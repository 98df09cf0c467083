//! Static portfolio content. Everything here is read-only data defined at
//! startup; the interpreter core never mutates it.

pub const OWNER_NAME: &str = "Rohit Shukla";
pub const PROMPT_LABEL: &str = "$";
pub const RESUME_PDF_URL: &str = "/resume.pdf";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillCategory {
    Frontend,
    Backend,
    Languages,
    Tools,
}

impl SkillCategory {
    pub fn label(self) -> &'static str {
        match self {
            SkillCategory::Frontend => "Frontend",
            SkillCategory::Backend => "Backend",
            SkillCategory::Languages => "Languages",
            SkillCategory::Tools => "Tools",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            SkillCategory::Frontend => "🎨",
            SkillCategory::Backend => "⚙️",
            SkillCategory::Languages => "📚",
            SkillCategory::Tools => "🛠️",
        }
    }
}

pub const SKILL_CATEGORIES: [SkillCategory; 4] = [
    SkillCategory::Frontend,
    SkillCategory::Backend,
    SkillCategory::Languages,
    SkillCategory::Tools,
];

pub struct Skill {
    pub name: &'static str,
    pub category: SkillCategory,
    pub icon: &'static str,
}

pub const SKILLS: &[Skill] = &[
    Skill {
        name: "React",
        category: SkillCategory::Frontend,
        icon: "⚛️",
    },
    Skill {
        name: "Next.js",
        category: SkillCategory::Frontend,
        icon: "▲",
    },
    Skill {
        name: "TypeScript",
        category: SkillCategory::Languages,
        icon: "📘",
    },
    Skill {
        name: "Python",
        category: SkillCategory::Languages,
        icon: "🐍",
    },
    Skill {
        name: "C++",
        category: SkillCategory::Languages,
        icon: "",
    },
    Skill {
        name: "Node.js",
        category: SkillCategory::Backend,
        icon: "🟢",
    },
    Skill {
        name: "PostgreSQL",
        category: SkillCategory::Backend,
        icon: "🐘",
    },
    Skill {
        name: "Tailwind CSS",
        category: SkillCategory::Frontend,
        icon: "🎨",
    },
    Skill {
        name: "Git",
        category: SkillCategory::Tools,
        icon: "📦",
    },
];

pub struct Project {
    pub name: &'static str,
    pub description: &'static str,
    pub technologies: &'static [&'static str],
    pub github_url: Option<&'static str>,
    pub live_url: Option<&'static str>,
    pub featured: bool,
}

pub const PROJECTS: &[Project] = &[
    Project {
        name: "Attendance System",
        description: "A web application for managing attendance of students for The Department of Computer Science, Gujarat University.",
        technologies: &[
            "Next.js",
            "TypeScript",
            "Shadcn",
            "Tailwind CSS",
            "MongoDB",
            "Node.js",
            "Git",
        ],
        github_url: None,
        live_url: Some("https://attendance-system-1910.vercel.app"),
        featured: true,
    },
    Project {
        name: "DCS: Digital Campus Support",
        description: "A web application for managing all the services of a college campus like chating, notes, assignments, etc.",
        technologies: &[
            "Next.js",
            "TypeScript",
            "Shadcn",
            "Tailwind CSS",
            "Firebase",
            "Node.js",
            "Git",
        ],
        github_url: Some("https://github.com/Unsorted-Wings/Digital-Campus-Support"),
        live_url: Some("https://digital-campus-support.vercel.app"),
        featured: true,
    },
];

pub struct Experience {
    pub company: &'static str,
    pub position: &'static str,
    pub period: &'static str,
    pub description: &'static str,
    pub technologies: &'static [&'static str],
    pub logo: &'static str,
}

pub const EXPERIENCE: &[Experience] = &[
    Experience {
        company: "Tech Solutions Inc.",
        position: "Senior Full Stack Developer",
        period: "2022 - Present",
        description: "Leading the development of enterprise-level applications and mentoring junior developers.",
        technologies: &["React", "Node.js", "AWS", "Docker"],
        logo: "🏢",
    },
    Experience {
        company: "Digital Innovations",
        position: "Full Stack Developer",
        period: "2020 - 2022",
        description: "Developed and maintained multiple web applications using modern technologies.",
        technologies: &["Vue.js", "Python", "PostgreSQL"],
        logo: "💻",
    },
    Experience {
        company: "StartUp Labs",
        position: "Frontend Developer",
        period: "2019 - 2020",
        description: "Built responsive and interactive user interfaces for various client projects.",
        technologies: &["React", "TypeScript", "Sass"],
        logo: "🚀",
    },
];

pub struct ContactLink {
    pub icon: &'static str,
    pub label: &'static str,
    pub href: &'static str,
}

pub const CONTACT_LINKS: &[ContactLink] = &[
    ContactLink {
        icon: "📧",
        label: "your.email@example.com",
        href: "mailto:your.email@example.com",
    },
    ContactLink {
        icon: "🐙",
        label: "github.com/unsorted-wings",
        href: "https://github.com/unsorted-wings",
    },
    ContactLink {
        icon: "💼",
        label: "linkedin.com/in/rohit-shukla-a8729124b",
        href: "https://linkedin.com/in/rohit-shukla-a8729124b",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Warning,
    Success,
}

impl Severity {
    pub fn prefix(self) -> &'static str {
        match self {
            Severity::Info => "[*]",
            Severity::Warning => "[!]",
            Severity::Success => "[+]",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Severity::Info => "intro-line--info",
            Severity::Warning => "intro-line--warning",
            Severity::Success => "intro-line--success",
        }
    }
}

pub struct IntroLine {
    pub message: &'static str,
    pub severity: Severity,
}

pub const INTRO_SCRIPT: &[IntroLine] = &[
    IntroLine {
        message: "Initializing secure connection...",
        severity: Severity::Info,
    },
    IntroLine {
        message: "Establishing encrypted tunnel...",
        severity: Severity::Info,
    },
    IntroLine {
        message: "Bypassing firewall protocols...",
        severity: Severity::Warning,
    },
    IntroLine {
        message: "Accessing secure mainframe...",
        severity: Severity::Info,
    },
    IntroLine {
        message: "Decrypting user credentials...",
        severity: Severity::Warning,
    },
    IntroLine {
        message: "Running security protocols...",
        severity: Severity::Info,
    },
    IntroLine {
        message: "Verifying biometric data...",
        severity: Severity::Warning,
    },
    IntroLine {
        message: "Establishing quantum encryption...",
        severity: Severity::Info,
    },
    IntroLine {
        message: "Access granted!",
        severity: Severity::Success,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intro_script_ends_on_success() {
        let last = INTRO_SCRIPT.last().expect("script should not be empty");
        assert_eq!(last.severity, Severity::Success);
        assert_eq!(last.message, "Access granted!");
    }


    #[test]
    fn every_skill_category_has_entries() {
        for category in SKILL_CATEGORIES {
            assert!(
                SKILLS.iter().any(|skill| skill.category == category),
                "No skills listed under {}",
                category.label()
            );
        }
    }

    #[test]
    fn featured_projects_exist() {
        assert!(PROJECTS.iter().any(|project| project.featured));
    }
}
