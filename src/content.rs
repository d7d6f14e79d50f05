use std::convert::TryFrom;

use iced::Color;
use serde::Deserialize;

use crate::style;

/// A `#rrggbb` color as written in `portfolio.json`.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(try_from = "String")]
pub struct Hex(pub Color);

impl TryFrom<String> for Hex {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        let digits = value.trim().trim_start_matches('#');
        if digits.len() != 6 || !digits.is_ascii() {
            return Err(format!("expected a #rrggbb color, got {:?}", value));
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16)
                .map_err(|_| format!("expected a #rrggbb color, got {:?}", value))
        };
        Ok(Hex(Color::from_rgb8(channel(0..2)?, channel(2..4)?, channel(4..6)?)))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Mobile,
    Web,
    Design,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Experience {
    pub company: String,
    pub position: String,
    pub period: String,
    pub description: String,
    #[serde(default)]
    pub achievements: Vec<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
    pub color: Hex,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub category: Category,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub featured: bool,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Skill {
    pub name: String,
    pub level: u8,
}

#[derive(Clone, Debug, Deserialize)]
pub struct SkillGroup {
    pub title: String,
    pub color: Hex,
    pub skills: Vec<Skill>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct ContactMethod {
    pub label: String,
    pub value: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct SocialLink {
    pub label: String,
    pub color: Hex,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub name: String,
    pub initials: String,
    pub roles: Vec<String>,
    pub bio: String,
    pub highlights: Vec<String>,
    pub experience: Vec<Experience>,
    pub projects: Vec<Project>,
    pub skills: Vec<SkillGroup>,
    pub contact: Vec<ContactMethod>,
    pub social: Vec<SocialLink>,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}

fn hex(r: u8, g: u8, b: u8) -> Hex {
    Hex(Color::from_rgb8(r, g, b))
}

fn experience(
    company: &str,
    position: &str,
    period: &str,
    description: &str,
    achievements: &[&str],
    technologies: &[&str],
    color: Hex,
) -> Experience {
    Experience {
        company: company.into(),
        position: position.into(),
        period: period.into(),
        description: description.into(),
        achievements: strings(achievements),
        technologies: strings(technologies),
        color,
    }
}

fn project(
    title: &str,
    description: &str,
    category: Category,
    technologies: &[&str],
    featured: bool,
) -> Project {
    Project {
        title: title.into(),
        description: description.into(),
        category,
        technologies: strings(technologies),
        featured,
    }
}

fn group(title: &str, color: Hex, skills: &[(&str, u8)]) -> SkillGroup {
    SkillGroup {
        title: title.into(),
        color,
        skills: skills
            .iter()
            .map(|&(name, level)| Skill {
                name: name.into(),
                level,
            })
            .collect(),
    }
}

impl Default for Profile {
    fn default() -> Self {
        let highlight = Hex(style::HIGHLIGHT);
        let accent = Hex(style::ACCENT);

        Profile {
            name: "Ebenezer Oteng Siaw".into(),
            initials: "ES".into(),
            roles: strings(&[
                "Software Engineer",
                "UI/UX Designer",
                "Mobile Developer",
                "Tech Innovator",
            ]),
            bio: "Currently shaping the future at Facebook as a Software Engineer. \
                  With 30 years of industry experience, I bridge the gap between \
                  innovative design and robust engineering."
                .into(),
            highlights: strings(&["Clean Code", "Mobile First", "Pixel Perfect"]),
            experience: vec![
                experience(
                    "Facebook",
                    "Senior Software Engineer",
                    "2022 - Present",
                    "Leading mobile development initiatives for core Facebook applications.",
                    &[
                        "Improved app performance by 40% through advanced optimization techniques",
                        "Led a team of 8 developers in implementing new features",
                        "Reduced crash rate by 60% across all mobile platforms",
                    ],
                    &["React Native", "TypeScript", "GraphQL", "Node.js"],
                    hex(0x18, 0x77, 0xf2),
                ),
                experience(
                    "Google",
                    "Software Engineer",
                    "2020 - 2022",
                    "Worked on Google's mobile ecosystem and developer tools.",
                    &[
                        "Developed key features for Google Play Store",
                        "Contributed to open-source Android libraries",
                        "Mentored junior developers and conducted technical interviews",
                    ],
                    &["Kotlin", "Java", "Firebase", "Google Cloud"],
                    hex(0x42, 0x85, 0xf4),
                ),
                experience(
                    "Microsoft",
                    "UI/UX Engineer",
                    "2018 - 2020",
                    "Bridged design and engineering for Microsoft's product suite.",
                    &[
                        "Designed and implemented Fluent Design System components",
                        "Created interactive prototypes for stakeholder presentations",
                        "Improved accessibility compliance across all products",
                    ],
                    &["Figma", "React", "C#", "Azure"],
                    hex(0x00, 0x78, 0xd4),
                ),
            ],
            projects: vec![
                project(
                    "AI-Powered Mobile Assistant",
                    "An intelligent mobile assistant that uses machine learning to predict user needs and automate tasks.",
                    Category::Mobile,
                    &["React Native", "TensorFlow", "Node.js", "Python"],
                    true,
                ),
                project(
                    "E-Commerce Platform Redesign",
                    "Complete redesign of a major e-commerce platform focusing on user experience and conversion optimization.",
                    Category::Web,
                    &["React", "TypeScript", "GraphQL", "Tailwind CSS"],
                    true,
                ),
                project(
                    "Health & Fitness Tracker",
                    "Cross-platform mobile app for tracking health metrics with AI-powered insights and recommendations.",
                    Category::Mobile,
                    &["Flutter", "Dart", "Firebase", "ML Kit"],
                    false,
                ),
                project(
                    "Design System Framework",
                    "Comprehensive design system used by multiple teams across the organization for consistent UI/UX.",
                    Category::Design,
                    &["Figma", "Storybook", "React", "SASS"],
                    false,
                ),
            ],
            skills: vec![
                group(
                    "Frontend Development",
                    highlight,
                    &[("React", 95), ("TypeScript", 90), ("Next.js", 85), ("Tailwind CSS", 95)],
                ),
                group(
                    "Mobile Development",
                    accent,
                    &[
                        ("React Native", 92),
                        ("Flutter", 88),
                        ("iOS Development", 80),
                        ("Android Development", 85),
                    ],
                ),
                group(
                    "UI/UX Design",
                    highlight,
                    &[("Figma", 90), ("Adobe XD", 85), ("Prototyping", 88), ("Design Systems", 92)],
                ),
                group(
                    "Backend Development",
                    accent,
                    &[("Node.js", 88), ("Python", 85), ("GraphQL", 90), ("REST APIs", 92)],
                ),
                group(
                    "Cloud & DevOps",
                    highlight,
                    &[("AWS", 80), ("Docker", 85), ("CI/CD", 82), ("Firebase", 90)],
                ),
                group(
                    "Tools & Technologies",
                    accent,
                    &[("Git", 95), ("Jest", 85), ("Webpack", 80), ("Agile/Scrum", 90)],
                ),
            ],
            contact: vec![
                ContactMethod {
                    label: "Email".into(),
                    value: "ebenezer@example.com".into(),
                },
                ContactMethod {
                    label: "Phone".into(),
                    value: "+1 (555) 123-4567".into(),
                },
                ContactMethod {
                    label: "Location".into(),
                    value: "San Francisco, CA".into(),
                },
            ],
            social: vec![
                SocialLink {
                    label: "LinkedIn".into(),
                    color: hex(0x00, 0x77, 0xb5),
                },
                SocialLink {
                    label: "GitHub".into(),
                    color: hex(0x33, 0x33, 0x33),
                },
                SocialLink {
                    label: "Twitter".into(),
                    color: hex(0x1d, 0xa1, 0xf2),
                },
            ],
        }
    }
}
