use crate::core::links::{LinkAction, ProfileLinks};
use crate::core::sections::{scroll_spy_script, ScrollSpy, Section};
use crate::domain::model::{Education, Experience, Profile, Project, SkillGroup};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;

/// Page-level text and behaviour that does not come from the profile.
#[derive(Debug, Clone)]
pub struct PageSettings {
    pub title: String,
    pub language: String,
    pub footer_year: i32,
    pub footer_note: String,
    pub contact_heading: String,
    pub contact_message: String,
    pub scroll_offset: f64,
}

impl PageSettings {
    pub fn from_config<C: ConfigProvider>(config: &C, profile: &Profile) -> Self {
        Self {
            title: config.page_title(profile),
            language: config.language().to_string(),
            footer_year: config.footer_year(),
            footer_note: config.footer_note().to_string(),
            contact_heading: config.contact_heading().to_string(),
            contact_message: config.contact_message().to_string(),
            scroll_offset: config.scroll_offset(),
        }
    }
}

/// Icon shown next to a skill category heading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillIcon {
    Brain,
    Cpu,
    Code,
    Microscope,
    Book,
}

impl SkillIcon {
    pub fn for_category(category: &str) -> Self {
        match category {
            "AI/ML" => SkillIcon::Brain,
            "Robotics/Automation" => SkillIcon::Cpu,
            "Programming" => SkillIcon::Code,
            "Research" => SkillIcon::Microscope,
            _ => SkillIcon::Book,
        }
    }

    pub fn class_name(self) -> &'static str {
        match self {
            SkillIcon::Brain => "icon-brain",
            SkillIcon::Cpu => "icon-cpu",
            SkillIcon::Code => "icon-code",
            SkillIcon::Microscope => "icon-microscope",
            SkillIcon::Book => "icon-book",
        }
    }
}

pub struct PageRenderer {
    settings: PageSettings,
}

impl PageRenderer {
    pub fn new(settings: PageSettings) -> Self {
        Self { settings }
    }

    /// Full HTML document for the profile.
    pub fn render_page(&self, profile: &Profile) -> Result<String> {
        let links = ProfileLinks::for_profile(profile);
        let mut html = String::new();
        html.push_str("<!DOCTYPE html>\n");
        html.push_str(&format!(
            "<html lang=\"{}\">\n<head>\n",
            escape_html(&self.settings.language)
        ));
        html.push_str("<meta charset=\"utf-8\" />\n");
        html.push_str(
            "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\" />\n",
        );
        html.push_str(&format!(
            "<meta name=\"description\" content=\"{}\" />\n",
            escape_html(&profile.personal.tagline)
        ));
        html.push_str(&format!(
            "<title>{}</title>\n",
            escape_html(&self.settings.title)
        ));
        html.push_str(shared_styles());
        html.push_str("\n</head>\n<body>\n");

        self.render_nav(&mut html, profile, &links);
        html.push_str("<main>\n");
        for section in Section::ALL {
            self.render_section_into(&mut html, section, profile, &links);
            html.push('\n');
        }
        html.push_str("</main>\n");
        self.render_footer(&mut html, profile);

        html.push_str("<script>\n");
        html.push_str(&scroll_spy_script(self.settings.scroll_offset)?);
        html.push_str("\n</script>\n</body>\n</html>\n");
        Ok(html)
    }

    /// One `<section>` of the page.
    pub fn render_section(&self, section: Section, profile: &Profile) -> String {
        let mut html = String::new();
        self.render_section_into(
            &mut html,
            section,
            profile,
            &ProfileLinks::for_profile(profile),
        );
        html
    }

    fn render_section_into(
        &self,
        html: &mut String,
        section: Section,
        profile: &Profile,
        links: &ProfileLinks,
    ) {
        match section {
            Section::Hero => render_hero(html, profile, links),
            Section::About => render_about(html, profile),
            Section::Research => render_research(html, &profile.education, links),
            Section::Projects => render_projects(html, &profile.projects),
            Section::Experience => render_experience(html, &profile.experience),
            Section::Skills => render_skills(html, &profile.skills),
            Section::Contact => self.render_contact(html, profile, links),
        }
    }

    fn render_nav(&self, html: &mut String, profile: &Profile, links: &ProfileLinks) {
        let initial = ScrollSpy::new(self.settings.scroll_offset).active();

        html.push_str("<nav class=\"nav\"><div class=\"container nav-inner\">");
        html.push_str(&format!(
            "<a class=\"nav-brand\" href=\"#hero\">{}</a>",
            escape_html(&profile.personal.name)
        ));
        html.push_str("<div class=\"nav-links\">");
        for section in Section::NAV {
            let class = if section == initial {
                "nav-link active"
            } else {
                "nav-link"
            };
            html.push_str(&format!(
                "<a class=\"{class}\" href=\"#{id}\" data-section=\"{id}\">{label}</a>",
                id = section.id(),
                label = section.label()
            ));
        }
        html.push_str("</div>");
        link_button(html, &links.cv, "icon-download", "Download CV", "primary");
        html.push_str("</div></nav>\n");
    }

    fn render_contact(&self, html: &mut String, profile: &Profile, links: &ProfileLinks) {
        let personal = &profile.personal;
        open_section(html, Section::Contact, "plain", "container tight center");
        html.push_str(&format!(
            "<h2>{}</h2>",
            escape_html(&self.settings.contact_heading)
        ));
        html.push_str(&format!(
            "<p class=\"lead\">{}</p>",
            escape_html(&self.settings.contact_message)
        ));
        html.push_str("<div class=\"actions center\">");
        link_button(html, &links.email, "icon-mail", "Email Me", "primary");
        link_button(html, &links.linkedin, "icon-linkedin", "LinkedIn", "outline");
        html.push_str("</div>");
        html.push_str("<div class=\"contact-details\">");
        icon_text(html, "icon-phone", &personal.phone);
        icon_text(html, "icon-pin", &personal.location);
        html.push_str("</div>");
        close_section(html);
    }

    fn render_footer(&self, html: &mut String, profile: &Profile) {
        html.push_str(&format!(
            "<footer class=\"footer\"><p>&copy; {} {}. {}</p></footer>\n",
            self.settings.footer_year,
            escape_html(&profile.personal.name),
            escape_html(&self.settings.footer_note)
        ));
    }
}

fn render_hero(html: &mut String, profile: &Profile, links: &ProfileLinks) {
    let personal = &profile.personal;
    open_section(html, Section::Hero, "hero", "container hero-grid");
    html.push_str("<div class=\"hero-text\">");
    html.push_str(&format!("<h1>{}</h1>", escape_html(&personal.name)));
    html.push_str(&format!(
        "<p class=\"tagline\">{}</p>",
        escape_html(&personal.tagline)
    ));
    html.push_str("<div class=\"actions\">");
    link_button(html, &links.cv, "icon-download", "Download CV", "primary");
    link_button(html, &links.linkedin, "icon-linkedin", "LinkedIn", "outline");
    link_button(html, &links.thesis, "icon-external", "Master's Thesis", "outline");
    html.push_str("</div>");
    html.push_str("<div class=\"contact-line\">");
    icon_text(html, "icon-pin", &personal.location);
    icon_text(html, "icon-mail", &personal.email);
    html.push_str("</div></div>");

    html.push_str("<div class=\"hero-portrait\"><div class=\"avatar\">");
    html.push_str(&format!(
        "<span class=\"avatar-fallback\">{}</span>",
        escape_html(&personal.initials())
    ));
    html.push_str(&format!(
        "<img src=\"{}\" alt=\"Profile photo\" onerror=\"this.remove()\" />",
        escape_html(&personal.image)
    ));
    html.push_str("</div></div>");
    close_section(html);
}

fn render_about(html: &mut String, profile: &Profile) {
    open_section(html, Section::About, "muted", "container narrow");
    html.push_str("<h2>About Me</h2><div class=\"about-grid\"><div class=\"about-main\">");
    html.push_str(&format!(
        "<p class=\"lead\">{}</p>",
        escape_html(&profile.about.description)
    ));
    if !profile.about.interests.is_empty() {
        html.push_str("<h3>Research Interests</h3>");
        render_badges(html, &profile.about.interests);
    }
    html.push_str("</div><div class=\"about-side\"><h3>Languages</h3><ul class=\"languages\">");
    for language in &profile.languages {
        html.push_str(&format!(
            "<li class=\"language\"><span>{}</span><span class=\"badge outline\">{}</span></li>",
            escape_html(&language.name),
            escape_html(&language.level)
        ));
    }
    html.push_str("</ul></div></div>");
    close_section(html);
}

fn render_research(html: &mut String, education: &[Education], links: &ProfileLinks) {
    open_section(html, Section::Research, "plain", "container narrow");
    html.push_str("<h2>Education &amp; Research</h2><div class=\"stack\">");
    for entry in education {
        html.push_str("<article class=\"card education\">");
        html.push_str(&format!("<h3>{}</h3>", escape_html(&entry.degree)));
        html.push_str(&format!(
            "<p class=\"meta\">{} &bull; {}</p>",
            escape_html(&entry.institution),
            escape_html(&entry.period)
        ));
        if let Some(detail) = entry.detail() {
            html.push_str("<div class=\"education-detail\">");
            html.push_str(&format!(
                "<p><strong>Research/Project:</strong> {}</p>",
                escape_html(detail)
            ));
            if entry.thesis.is_some() {
                link_button(html, &links.thesis, "icon-external", "View Thesis", "outline small");
            }
            html.push_str("</div>");
        }
        html.push_str("</article>");
    }
    html.push_str("</div>");
    close_section(html);
}

fn render_projects(html: &mut String, projects: &[Project]) {
    open_section(html, Section::Projects, "muted", "container");
    html.push_str("<h2>Projects &amp; Research</h2><div class=\"grid-2\">");
    for project in projects {
        html.push_str("<article class=\"card project\"><div class=\"card-head\"><div>");
        html.push_str(&format!("<h3>{}</h3>", escape_html(&project.title)));
        html.push_str(&format!(
            "<span class=\"badge outline\">{}</span>",
            escape_html(&project.kind)
        ));
        html.push_str("</div>");
        if let Some(link) = &project.link {
            let action = LinkAction::external(link);
            html.push_str(&format!(
                "<a class=\"button ghost small project-link\" href=\"{}\"{} aria-label=\"Open project\"><span class=\"icon icon-external\" aria-hidden=\"true\"></span></a>",
                escape_html(&action.href()),
                target_attrs(&action)
            ));
        }
        html.push_str("</div>");
        html.push_str(&format!(
            "<p class=\"description\">{}</p>",
            escape_html(&project.description)
        ));
        render_badges(html, &project.technologies);
        html.push_str("</article>");
    }
    html.push_str("</div>");
    close_section(html);
}

fn render_experience(html: &mut String, experience: &[Experience]) {
    open_section(html, Section::Experience, "plain", "container narrow");
    html.push_str("<h2>Professional Experience</h2><div class=\"timeline\">");
    for entry in experience {
        html.push_str("<div class=\"timeline-item\"><span class=\"timeline-dot\"></span>");
        html.push_str("<article class=\"card\">");
        html.push_str(&format!("<h3>{}</h3>", escape_html(&entry.title)));
        html.push_str(&format!(
            "<div class=\"meta split\"><span>{}, {}</span><span>{}</span></div>",
            escape_html(&entry.company),
            escape_html(&entry.location),
            escape_html(&entry.period)
        ));
        html.push_str(&format!(
            "<p class=\"description\">{}</p>",
            escape_html(&entry.description)
        ));
        html.push_str("</article></div>");
    }
    html.push_str("</div>");
    close_section(html);
}

fn render_skills(html: &mut String, skills: &[SkillGroup]) {
    open_section(html, Section::Skills, "muted", "container narrow");
    html.push_str("<h2>Technical Skills</h2><div class=\"grid-2\">");
    for group in skills {
        let icon = SkillIcon::for_category(&group.category);
        html.push_str("<article class=\"card skill-group\">");
        html.push_str(&format!(
            "<h3 class=\"skill-category\"><span class=\"icon {}\" aria-hidden=\"true\"></span><span>{}</span></h3>",
            icon.class_name(),
            escape_html(&group.category)
        ));
        render_badges(html, &group.skills);
        html.push_str("</article>");
    }
    html.push_str("</div>");
    close_section(html);
}

fn open_section(html: &mut String, section: Section, tone: &str, container: &str) {
    html.push_str(&format!(
        "<section id=\"{}\" class=\"section {}\"><div class=\"{}\">",
        section.id(),
        tone,
        container
    ));
}

fn close_section(html: &mut String) {
    html.push_str("</div></section>");
}

fn render_badges(html: &mut String, items: &[String]) {
    html.push_str("<ul class=\"badges\">");
    for item in items {
        html.push_str(&format!("<li class=\"badge\">{}</li>", escape_html(item)));
    }
    html.push_str("</ul>");
}

fn link_button(html: &mut String, action: &LinkAction, icon: &str, label: &str, variant: &str) {
    html.push_str(&format!(
        "<a class=\"button {}\" href=\"{}\"{}><span class=\"icon {}\" aria-hidden=\"true\"></span>{}</a>",
        variant,
        escape_html(&action.href()),
        target_attrs(action),
        icon,
        escape_html(label)
    ));
}

fn target_attrs(action: &LinkAction) -> String {
    match (action.target(), action.rel()) {
        (Some(target), Some(rel)) => format!(" target=\"{}\" rel=\"{}\"", target, rel),
        (Some(target), None) => format!(" target=\"{}\"", target),
        _ => String::new(),
    }
}

fn icon_text(html: &mut String, icon: &str, text: &str) {
    html.push_str(&format!(
        "<span class=\"with-icon\"><span class=\"icon {}\" aria-hidden=\"true\"></span>{}</span>",
        icon,
        escape_html(text)
    ));
}

pub fn escape_html(input: &str) -> String {
    input
        .chars()
        .map(|ch| match ch {
            '<' => "&lt;".into(),
            '>' => "&gt;".into(),
            '&' => "&amp;".into(),
            '"' => "&quot;".into(),
            '\'' => "&#39;".into(),
            _ => ch.to_string(),
        })
        .collect::<String>()
}

fn shared_styles() -> &'static str {
    "<style>
        * { box-sizing: border-box; }
        html { scroll-behavior: smooth; }
        body { margin: 0; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif; color: #111827; background: #fff; line-height: 1.6; }
        a { color: inherit; text-decoration: none; }
        h1 { font-size: 3.5rem; font-weight: 300; letter-spacing: -0.02em; margin: 0 0 1rem; }
        h2 { font-size: 2.25rem; font-weight: 300; text-align: center; margin: 0 0 3rem; }
        h3 { font-size: 1.2rem; font-weight: 500; margin: 0 0 0.5rem; }
        .container { max-width: 72rem; margin: 0 auto; padding: 0 1.5rem; }
        .container.narrow { max-width: 56rem; }
        .container.tight { max-width: 42rem; }
        .center { text-align: center; justify-content: center; }
        .section { padding: 4rem 0; scroll-margin-top: 4.5rem; }
        .section.muted { background: #f9fafb; }
        .nav { position: fixed; top: 0; width: 100%; background: rgba(255, 255, 255, 0.8); backdrop-filter: blur(12px); border-bottom: 1px solid #f3f4f6; z-index: 50; }
        .nav-inner { display: flex; justify-content: space-between; align-items: center; padding-top: 1rem; padding-bottom: 1rem; }
        .nav-brand { font-size: 1.25rem; font-weight: 300; }
        .nav-links { display: flex; gap: 2rem; }
        .nav-link { font-size: 0.875rem; color: #4b5563; border-bottom: 1px solid transparent; }
        .nav-link:hover, .nav-link.active { color: #111827; }
        .nav-link.active { border-bottom-color: #111827; }
        .hero { padding-top: 7rem; }
        .hero-grid { display: grid; grid-template-columns: 1fr 1fr; gap: 3rem; align-items: center; }
        .tagline { font-size: 1.25rem; color: #4b5563; }
        .actions { display: flex; flex-wrap: wrap; gap: 1rem; margin: 2rem 0; }
        .button { display: inline-flex; align-items: center; gap: 0.5rem; padding: 0.75rem 1.5rem; border-radius: 0.375rem; font-size: 0.9rem; }
        .button.primary { background: #111827; color: #fff; }
        .button.primary:hover { background: #1f2937; }
        .button.outline { border: 1px solid #d1d5db; }
        .button.outline:hover, .button.ghost:hover { background: #f9fafb; }
        .button.small { padding: 0.4rem 0.8rem; font-size: 0.8rem; margin-top: 0.75rem; }
        .contact-line, .contact-details { display: flex; gap: 1.5rem; font-size: 0.875rem; color: #4b5563; }
        .contact-details { justify-content: center; margin-top: 2rem; padding-top: 2rem; border-top: 1px solid #e5e7eb; }
        .with-icon { display: inline-flex; align-items: center; gap: 0.5rem; }
        .hero-portrait { display: flex; justify-content: flex-end; }
        .avatar { position: relative; width: 20rem; height: 20rem; border-radius: 50%; overflow: hidden; background: #f3f4f6; }
        .avatar img { position: absolute; inset: 0; width: 100%; height: 100%; object-fit: cover; }
        .avatar-fallback { display: flex; width: 100%; height: 100%; align-items: center; justify-content: center; font-size: 2.25rem; color: #4b5563; }
        .about-grid { display: grid; grid-template-columns: 2fr 1fr; gap: 2rem; }
        .lead { font-size: 1.125rem; color: #374151; }
        .badges { list-style: none; display: flex; flex-wrap: wrap; gap: 0.5rem; padding: 0; margin: 0; }
        .badge { display: inline-block; padding: 0.15rem 0.6rem; border-radius: 9999px; font-size: 0.75rem; background: #e5e7eb; color: #1f2937; }
        .badge.outline { background: transparent; border: 1px solid #d1d5db; }
        .languages { list-style: none; padding: 0; margin: 0; }
        .language { display: flex; justify-content: space-between; align-items: center; margin-bottom: 0.75rem; color: #374151; }
        .stack > * + * { margin-top: 1.5rem; }
        .grid-2 { display: grid; grid-template-columns: 1fr 1fr; gap: 2rem; }
        .card { background: #fff; border-radius: 0.5rem; padding: 1.5rem; box-shadow: 0 1px 2px rgba(0, 0, 0, 0.06); }
        .card.project:hover { box-shadow: 0 4px 8px rgba(0, 0, 0, 0.08); }
        .card-head { display: flex; justify-content: space-between; align-items: flex-start; }
        .meta { color: #4b5563; margin: 0; }
        .meta.split { display: flex; justify-content: space-between; flex-wrap: wrap; }
        .description { color: #374151; }
        .timeline-item { position: relative; padding-left: 2rem; margin-bottom: 2rem; }
        .timeline-dot { position: absolute; left: 0; top: 0.5rem; width: 0.75rem; height: 0.75rem; border-radius: 50%; background: #111827; }
        .timeline-item::after { content: ''; position: absolute; left: 0.35rem; top: 1.25rem; width: 2px; height: 100%; background: #e5e7eb; }
        .skill-category { display: flex; align-items: center; gap: 0.75rem; }
        .footer { background: #111827; color: #9ca3af; text-align: center; padding: 2rem 1.5rem; }
        .icon::before { display: inline-block; width: 1.1em; text-align: center; }
        .icon-download::before { content: '\\2193'; }
        .icon-mail::before { content: '\\2709'; }
        .icon-linkedin::before { content: 'in'; font-weight: 700; }
        .icon-external::before { content: '\\2197'; }
        .icon-pin::before { content: '\\25CF'; }
        .icon-phone::before { content: '\\260E'; }
        .icon-brain::before { content: '\\1F9E0'; }
        .icon-cpu::before { content: '\\2699'; }
        .icon-code::before { content: '</>'; font-family: monospace; }
        .icon-microscope::before { content: '\\1F52C'; }
        .icon-book::before { content: '\\1F4D6'; }
        @media (max-width: 768px) {
            .nav-links { display: none; }
            .hero-grid, .about-grid, .grid-2 { grid-template-columns: 1fr; }
            .hero-portrait { justify-content: center; }
        }
    </style>"
}
