use portfolio_site::core::render::{escape_html, PageRenderer, PageSettings};
use portfolio_site::core::sections::{BoundingBox, ScrollSpy, Section};
use portfolio_site::{Profile, SiteConfig};

fn render(section: Section) -> (Profile, String) {
    let profile = Profile::embedded().unwrap();
    let settings = PageSettings::from_config(&SiteConfig::default(), &profile);
    let fragment = PageRenderer::new(settings).render_section(section, &profile);
    (profile, fragment)
}

/// Name, tagline and email each appear once in the hero.
#[test]
fn test_hero_shows_identity_exactly_once() {
    let (profile, hero) = render(Section::Hero);
    let personal = &profile.personal;

    assert_eq!(hero.matches(&escape_html(&personal.name)).count(), 1);
    assert_eq!(hero.matches(&escape_html(&personal.tagline)).count(), 1);
    assert_eq!(hero.matches(&personal.email).count(), 1);
    assert!(hero.contains(">FHF</span>"));
}

#[test]
fn test_contact_shows_phone_exactly_once() {
    let (profile, contact) = render(Section::Contact);

    assert_eq!(contact.matches(&profile.personal.phone).count(), 1);
    assert!(contact.contains("<h2>Get In Touch</h2>"));
}

#[test]
fn test_email_action_is_mailto_of_configured_address() {
    let (profile, contact) = render(Section::Contact);
    let expected = format!("href=\"mailto:{}\"", profile.personal.email);

    assert!(contact.contains(&expected));
    // mail links replace the current location instead of opening a new context
    let anchor_start = contact.find(&expected).unwrap();
    let anchor_end = anchor_start + contact[anchor_start..].find('>').unwrap();
    assert!(!contact[anchor_start..anchor_end].contains("target="));
}

#[test]
fn test_education_detail_rendered_only_when_present() {
    let (profile, research) = render(Section::Research);
    let cards: Vec<&str> = research
        .split("<article class=\"card education\">")
        .skip(1)
        .collect();

    assert_eq!(cards.len(), profile.education.len());
    for (card, entry) in cards.iter().zip(&profile.education) {
        assert!(card.contains(&escape_html(&entry.degree)));
        match entry.detail() {
            Some(detail) => {
                assert!(card.contains("<strong>Research/Project:</strong>"));
                assert!(card.contains(&escape_html(detail)));
            }
            None => assert!(!card.contains("education-detail")),
        }
        assert_eq!(card.contains("View Thesis"), entry.thesis.is_some());
    }
}

#[test]
fn test_every_skill_listed_under_its_category() {
    let (profile, skills) = render(Section::Skills);
    let cards: Vec<&str> = skills
        .split("<article class=\"card skill-group\">")
        .skip(1)
        .collect();

    assert_eq!(cards.len(), profile.skills.len());
    for (card, group) in cards.iter().zip(&profile.skills) {
        assert!(card.contains(&format!("<span>{}</span></h3>", escape_html(&group.category))));
        for skill in &group.skills {
            assert!(
                card.contains(&format!("<li class=\"badge\">{}</li>", escape_html(skill))),
                "{} missing under {}",
                skill,
                group.category
            );
        }
    }
}

#[test]
fn test_project_link_button_only_for_linked_projects() {
    let (profile, projects) = render(Section::Projects);
    let cards: Vec<&str> = projects
        .split("<article class=\"card project\">")
        .skip(1)
        .collect();

    for (card, project) in cards.iter().zip(&profile.projects) {
        assert_eq!(card.contains("project-link"), project.link.is_some());
        if let Some(link) = &project.link {
            assert!(card.contains(&format!("href=\"{}\" target=\"_blank\"", escape_html(link))));
        }
    }
}

#[test]
fn test_experience_lists_company_and_location() {
    let (profile, experience) = render(Section::Experience);
    for entry in &profile.experience {
        assert!(experience.contains(&format!(
            "<span>{}, {}</span>",
            escape_html(&entry.company),
            escape_html(&entry.location)
        )));
    }
}

#[test]
fn test_full_page_contains_every_section_and_script() {
    let profile = Profile::embedded().unwrap();
    let settings = PageSettings::from_config(&SiteConfig::default(), &profile);
    let page = PageRenderer::new(settings).render_page(&profile).unwrap();

    for section in Section::ALL {
        assert_eq!(page.matches(&format!("<section id=\"{}\"", section.id())).count(), 1);
    }
    for section in Section::NAV {
        assert!(page.contains(&format!("data-section=\"{}\"", section.id())));
    }
    assert!(page.contains("<title>Fathima Hisa Faiyaz | Portfolio</title>"));
    assert!(page.contains("window.addEventListener(\"scroll\", update);"));
    assert!(page.contains("&copy; 2024 Fathima Hisa Faiyaz."));
}

#[test]
fn test_scrolling_to_contact_activates_only_contact() {
    let mut spy = ScrollSpy::new(100.0);
    let active = spy.observe(|section| match section {
        Section::Contact => Some(BoundingBox::new(20.0, 700.0)),
        Section::Skills => Some(BoundingBox::new(-900.0, 20.0)),
        _ => Some(BoundingBox::new(-5000.0, -900.0)),
    });

    assert_eq!(active, Section::Contact);
    let highlighted: Vec<Section> = Section::NAV
        .into_iter()
        .filter(|section| spy.is_active(*section))
        .collect();
    assert_eq!(highlighted, vec![Section::Contact]);
}
