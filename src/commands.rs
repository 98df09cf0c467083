use crate::content::{self, SKILL_CATEGORIES};
use crate::theme::Theme;
use crate::utils;

/// The closed command vocabulary. Dispatch is exhaustive over this enum, so
/// adding a command without wiring its output fails at build time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Help,
    About,
    Skills,
    Projects,
    Resume,
    Contact,
    Clear,
    Theme,
    Particles,
}

pub const COMMANDS: [Command; 9] = [
    Command::Help,
    Command::About,
    Command::Skills,
    Command::Projects,
    Command::Resume,
    Command::Contact,
    Command::Clear,
    Command::Theme,
    Command::Particles,
];

/// Exact-match tab-completion keys. The lookup is a full-string key match,
/// not a prefix scan over command names.
const SUGGESTION_TABLE: &[(&str, Command)] = &[
    ("ab", Command::About),
    ("sk", Command::Skills),
    ("pro", Command::Projects),
    ("res", Command::Resume),
    ("con", Command::Contact),
    ("cl", Command::Clear),
    ("th", Command::Theme),
    ("par", Command::Particles),
];

impl Command {
    pub fn name(self) -> &'static str {
        match self {
            Command::Help => "help",
            Command::About => "about",
            Command::Skills => "skills",
            Command::Projects => "projects",
            Command::Resume => "resume",
            Command::Contact => "contact",
            Command::Clear => "clear",
            Command::Theme => "theme",
            Command::Particles => "particles",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Command::Help => "Show available commands",
            Command::About => "Learn about me",
            Command::Skills => "View my technical skills",
            Command::Projects => "See my featured projects",
            Command::Resume => "View my professional experience",
            Command::Contact => "Get my contact information",
            Command::Clear => "Clear the terminal",
            Command::Theme => "Toggle theme (dark/light)",
            Command::Particles => "Toggle particle effect",
        }
    }

    /// Matches the full normalized input against the command table.
    /// Anything else, arguments included, is an unknown command.
    pub fn parse(input: &str) -> Option<Command> {
        let normalized = input.trim().to_ascii_lowercase();
        COMMANDS
            .into_iter()
            .find(|command| command.name() == normalized)
    }
}

/// Completion lookup for the current input buffer: exact key match over the
/// suggestion table, case-normalized. A missing key yields no suggestion.
pub fn suggestion_for(input: &str) -> Option<Command> {
    let normalized = input.trim().to_ascii_lowercase();
    SUGGESTION_TABLE
        .iter()
        .find(|(key, _)| *key == normalized)
        .map(|(_, command)| *command)
}

/// Rendered output of one transcript entry. Opaque to the session core; the
/// renderer decides how each variant is drawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    Text(String),
    Html(String),
}

/// Pre-authored output for the content commands. The stateful trio
/// (`clear`, `theme`, `particles`) has no static render and is handled by
/// the session itself.
pub fn static_output(command: Command) -> Option<Output> {
    match command {
        Command::Help => Some(render_help()),
        Command::About => Some(render_about()),
        Command::Skills => Some(render_skills()),
        Command::Projects => Some(render_projects()),
        Command::Resume => Some(render_resume()),
        Command::Contact => Some(render_contact()),
        Command::Clear | Command::Theme | Command::Particles => None,
    }
}

pub fn not_found() -> Output {
    Output::Text("Command not found. Type 'help' for available commands.".to_string())
}

pub fn particles_report(enabled: bool) -> Output {
    let state = if enabled { "enabled" } else { "disabled" };
    Output::Text(format!("Particles {state}"))
}

pub fn theme_report(theme: Theme) -> Output {
    Output::Text(format!("Theme switched to {}", theme.name()))
}

fn render_help() -> Output {
    let mut lines = Vec::new();
    lines.push("Available commands:".to_string());
    for command in COMMANDS {
        lines.push(format!(
            "  {:10} - {}",
            command.name(),
            command.description()
        ));
    }
    Output::Text(lines.join("\n"))
}

fn render_about() -> Output {
    let mut html = String::from(r#"<div class="output-card about-block">"#);
    html.push_str(r#"<h2 class="output-heading">About Me</h2>"#);
    html.push_str(&format!(
        r#"<p class="about-lead">🚀 Hi, I'm {}, a full-stack developer passionate about creating beautiful and functional applications</p>"#,
        utils::escape_html(content::OWNER_NAME)
    ));
    html.push_str(r#"<div class="about-grid">"#);
    html.push_str(
        r#"<div class="about-cell"><h3>What I Do</h3><p>Building modern web applications with cutting-edge technologies</p></div>"#,
    );
    html.push_str(
        r#"<div class="about-cell"><h3>My Approach</h3><p>Focus on clean code, user experience, and scalable solutions</p></div>"#,
    );
    html.push_str("</div></div>");
    Output::Html(html)
}

fn render_skills() -> Output {
    let mut html = String::from(r#"<div class="output-card skills-block">"#);
    html.push_str(r#"<h2 class="output-heading">Technical Skills</h2>"#);
    for category in SKILL_CATEGORIES {
        html.push_str(&format!(
            r#"<div class="skills-category"><h3>{} {}</h3><div class="skills-grid">"#,
            category.icon(),
            category.label()
        ));
        for skill in content::SKILLS
            .iter()
            .filter(|skill| skill.category == category)
        {
            html.push_str(&format!(
                r#"<div class="skill-chip"><span class="skill-icon">{}</span><span class="skill-name">{}</span></div>"#,
                skill.icon,
                utils::escape_html(skill.name)
            ));
        }
        html.push_str("</div></div>");
    }
    html.push_str("</div>");
    Output::Html(html)
}

fn render_projects() -> Output {
    let mut html = String::from(r#"<div class="output-card projects-block">"#);
    html.push_str(r#"<h2 class="output-heading">Featured Projects</h2>"#);
    for project in content::PROJECTS.iter().filter(|project| project.featured) {
        html.push_str(&format!(
            r#"<div class="project-card"><h3>{}</h3><p>{}</p>"#,
            utils::escape_html(project.name),
            utils::escape_html(project.description)
        ));
        html.push_str(&render_tech_tags(project.technologies));
        let mut links = String::new();
        if let Some(url) = project.github_url {
            links.push_str(&render_link("🐙", "GitHub", url));
        }
        if let Some(url) = project.live_url {
            links.push_str(&render_link("🌐", "Live Demo", url));
        }
        if !links.is_empty() {
            html.push_str(&format!(r#"<div class="project-links">{links}</div>"#));
        }
        html.push_str("</div>");
    }
    html.push_str("</div>");
    Output::Html(html)
}

fn render_resume() -> Output {
    let mut html = String::from(r#"<div class="output-card resume-block">"#);
    html.push_str(r#"<h2 class="output-heading">Professional Experience</h2>"#);
    for experience in content::EXPERIENCE {
        html.push_str(&format!(
            r#"<div class="experience-card"><span class="experience-logo">{}</span><div class="experience-body"><div class="experience-head"><h3>{}</h3><span class="experience-period">{}</span></div><h4>{}</h4><p>{}</p>"#,
            experience.logo,
            utils::escape_html(experience.position),
            utils::escape_html(experience.period),
            utils::escape_html(experience.company),
            utils::escape_html(experience.description)
        ));
        html.push_str(&render_tech_tags(experience.technologies));
        html.push_str("</div></div>");
    }
    html.push_str(&format!(
        r#"<div class="resume-download"><span>💡 Download my full resume for more details</span>{}</div>"#,
        render_link("📄", "Download PDF", content::RESUME_PDF_URL)
    ));
    html.push_str("</div>");
    Output::Html(html)
}

fn render_contact() -> Output {
    let mut html = String::from(r#"<div class="output-card contact-block">"#);
    html.push_str(r#"<h2 class="output-heading">Contact</h2>"#);
    html.push_str(r#"<div class="contact-links">"#);
    for link in content::CONTACT_LINKS {
        html.push_str(&format!(
            r#"<a class="contact-link" href="{}" target="_blank" rel="noopener noreferrer"><span class="contact-icon">{}</span><span class="contact-label">{}</span></a>"#,
            utils::escape_html(link.href),
            link.icon,
            utils::escape_html(link.label)
        ));
    }
    html.push_str("</div></div>");
    Output::Html(html)
}

fn render_tech_tags(technologies: &[&str]) -> String {
    let tags = technologies
        .iter()
        .map(|tech| format!(r#"<span class="tech-tag">{}</span>"#, utils::escape_html(tech)))
        .collect::<Vec<_>>()
        .join("");
    format!(r#"<div class="tech-tags">{tags}</div>"#)
}

fn render_link(icon: &str, label: &str, url: &str) -> String {
    format!(
        r#"<a class="output-link" href="{href}" target="_blank" rel="noopener noreferrer"><span>{icon}</span><span>{label}</span></a>"#,
        href = utils::escape_html(url),
        icon = icon,
        label = utils::escape_html(label)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_is_case_insensitive_and_trims() {
        assert_eq!(Command::parse("  HELP  "), Some(Command::Help));
        assert_eq!(Command::parse("Projects"), Some(Command::Projects));
        assert_eq!(Command::parse("made-up"), None);
        assert_eq!(Command::parse(""), None);
    }

    #[test]
    fn parse_rejects_commands_with_arguments() {
        assert_eq!(Command::parse("help me"), None);
    }

    #[test]
    fn suggestion_lookup_is_exact_match_only() {
        assert_eq!(suggestion_for("pro"), Some(Command::Projects));
        assert_eq!(suggestion_for("PRO"), Some(Command::Projects));
        // `p` and `proj` are not table keys even though they are prefixes.
        assert_eq!(suggestion_for("p"), None);
        assert_eq!(suggestion_for("proj"), None);
        assert_eq!(suggestion_for("xyz"), None);
    }

    #[test]
    fn every_suggestion_resolves_to_a_real_command() {
        for (key, command) in SUGGESTION_TABLE {
            assert_eq!(
                Command::parse(command.name()),
                Some(*command),
                "Suggestion key `{key}` points at an unparsable command"
            );
        }
    }

    #[test]
    fn help_lists_all_nine_commands() {
        let Output::Text(text) = render_help() else {
            panic!("help should render as text");
        };
        for command in COMMANDS {
            assert!(
                text.contains(command.name()) && text.contains(command.description()),
                "Help output missing `{}`:\n{text}",
                command.name()
            );
        }
    }

    #[test]
    fn static_output_covers_exactly_the_content_commands() {
        for command in COMMANDS {
            let has_static = static_output(command).is_some();
            let stateful = matches!(
                command,
                Command::Clear | Command::Theme | Command::Particles
            );
            assert_eq!(
                has_static, !stateful,
                "`{}` has unexpected static output shape",
                command.name()
            );
        }
    }

    #[test]
    fn projects_render_includes_featured_entries_and_links() {
        let Output::Html(html) = render_projects() else {
            panic!("projects should render as html");
        };
        assert!(html.contains("Attendance System"));
        assert!(html.contains("DCS: Digital Campus Support"));
        assert!(html.contains("https://digital-campus-support.vercel.app"));
        assert!(html.contains("Live Demo"));
    }

    #[test]
    fn contact_render_links_every_channel() {
        let Output::Html(html) = render_contact() else {
            panic!("contact should render as html");
        };
        assert!(html.contains("mailto:your.email@example.com"));
        assert!(html.contains("github.com/unsorted-wings"));
        assert!(html.contains("linkedin.com/in/rohit-shukla-a8729124b"));
    }

    #[test]
    fn particles_report_states_new_value() {
        assert_eq!(
            particles_report(true),
            Output::Text("Particles enabled".to_string())
        );
        assert_eq!(
            particles_report(false),
            Output::Text("Particles disabled".to_string())
        );
    }

    #[test]
    fn theme_report_names_the_new_theme() {
        assert_eq!(
            theme_report(Theme::Light),
            Output::Text("Theme switched to light".to_string())
        );
    }
}
