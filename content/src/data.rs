//! Static portfolio data: profile identity, navigation targets, skills,
//! work history, and social links. All bilingual fields use [`Localized`].

use crate::i18n::Localized;
use crate::prefs::Language;

pub struct Profile {
    pub name: &'static str,
    pub role: Localized<&'static str>,
    pub email: &'static str,
    pub location: Localized<&'static str>,
}

pub const PROFILE: Profile = Profile {
    name: "Warma Mohamed",
    role: Localized {
        en: "Full Stack Developer",
        fr: "Développeur Full Stack",
    },
    email: "hello@warma.dev",
    location: Localized {
        en: "Ouagadougou, Burkina Faso",
        fr: "Ouagadougou, Burkina Faso",
    },
};

/// A single-page navigation target. `id` doubles as the DOM id the navbar
/// scrolls to.
pub struct NavItem {
    pub id: &'static str,
    pub label: Localized<&'static str>,
}

pub const NAV_ITEMS: [NavItem; 5] = [
    NavItem {
        id: "home",
        label: Localized { en: "Home", fr: "Accueil" },
    },
    NavItem {
        id: "about",
        label: Localized { en: "About", fr: "À propos" },
    },
    NavItem {
        id: "skills",
        label: Localized { en: "Skills", fr: "Compétences" },
    },
    NavItem {
        id: "experience",
        label: Localized { en: "Experience", fr: "Expérience" },
    },
    NavItem {
        id: "contact",
        label: Localized { en: "Contact", fr: "Contact" },
    },
];

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SkillCategory {
    Frontend,
    Backend,
    Database,
    DevOps,
    Tools,
}

impl SkillCategory {
    pub const ALL: [SkillCategory; 5] = [
        SkillCategory::Frontend,
        SkillCategory::Backend,
        SkillCategory::Database,
        SkillCategory::DevOps,
        SkillCategory::Tools,
    ];

    pub fn label(self, lang: Language) -> &'static str {
        let pair = match self {
            SkillCategory::Frontend => Localized { en: "Frontend", fr: "Frontend" },
            SkillCategory::Backend => Localized { en: "Backend", fr: "Backend" },
            SkillCategory::Database => Localized { en: "Databases", fr: "Bases de données" },
            SkillCategory::DevOps => Localized { en: "DevOps", fr: "DevOps" },
            SkillCategory::Tools => Localized { en: "Tools", fr: "Outils" },
        };
        pair.get(lang)
    }
}

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub enum SkillLevel {
    Intermediate,
    Advanced,
    Expert,
}

impl SkillLevel {
    pub fn label(self, lang: Language) -> &'static str {
        let pair = match self {
            SkillLevel::Intermediate => Localized { en: "Intermediate", fr: "Intermédiaire" },
            SkillLevel::Advanced => Localized { en: "Advanced", fr: "Avancé" },
            SkillLevel::Expert => Localized { en: "Expert", fr: "Expert" },
        };
        pair.get(lang)
    }
}

pub struct Skill {
    pub name: &'static str,
    pub category: SkillCategory,
    pub level: SkillLevel,
}

pub const SKILLS: [Skill; 12] = [
    Skill { name: "Rust", category: SkillCategory::Backend, level: SkillLevel::Expert },
    Skill { name: "TypeScript", category: SkillCategory::Frontend, level: SkillLevel::Expert },
    Skill { name: "React", category: SkillCategory::Frontend, level: SkillLevel::Expert },
    Skill { name: "Dioxus", category: SkillCategory::Frontend, level: SkillLevel::Advanced },
    Skill { name: "Tailwind CSS", category: SkillCategory::Frontend, level: SkillLevel::Advanced },
    Skill { name: "Node.js", category: SkillCategory::Backend, level: SkillLevel::Advanced },
    Skill { name: "Python", category: SkillCategory::Backend, level: SkillLevel::Advanced },
    Skill { name: "PostgreSQL", category: SkillCategory::Database, level: SkillLevel::Advanced },
    Skill { name: "Redis", category: SkillCategory::Database, level: SkillLevel::Intermediate },
    Skill { name: "Docker", category: SkillCategory::DevOps, level: SkillLevel::Intermediate },
    Skill { name: "Git", category: SkillCategory::Tools, level: SkillLevel::Expert },
    Skill { name: "Figma", category: SkillCategory::Tools, level: SkillLevel::Intermediate },
];

pub struct ExperienceItem {
    pub company: &'static str,
    pub position: Localized<&'static str>,
    pub description: Localized<&'static str>,
    pub technologies: &'static [&'static str],
    /// Pre-localized date range, e.g. "Jan 2022 – Present".
    pub period: Localized<&'static str>,
    pub location: &'static str,
    pub current: bool,
}

pub const EXPERIENCE: [ExperienceItem; 3] = [
    ExperienceItem {
        company: "Tech Company Inc.",
        position: Localized {
            en: "Senior Frontend Developer",
            fr: "Développeur Frontend Senior",
        },
        description: Localized {
            en: "Led the development of modern web applications. Mentored \
                 junior developers and established best practices for the \
                 team.",
            fr: "Dirigé le développement d'applications web modernes. \
                 Encadré les développeurs juniors et établi les meilleures \
                 pratiques pour l'équipe.",
        },
        technologies: &["React", "TypeScript", "Next.js", "GraphQL"],
        period: Localized {
            en: "Jan 2022 – Present",
            fr: "Janv. 2022 – Aujourd'hui",
        },
        location: "Remote",
        current: true,
    },
    ExperienceItem {
        company: "Startup XYZ",
        position: Localized {
            en: "Full Stack Developer",
            fr: "Développeur Full Stack",
        },
        description: Localized {
            en: "Developed and maintained multiple web applications from \
                 concept to deployment, working closely with designers and \
                 product managers.",
            fr: "Développé et maintenu plusieurs applications web du \
                 concept au déploiement, en étroite collaboration avec les \
                 designers et chefs de produit.",
        },
        technologies: &["React", "Node.js", "PostgreSQL", "Docker"],
        period: Localized {
            en: "Jun 2020 – Dec 2021",
            fr: "Juin 2020 – Déc. 2021",
        },
        location: "Ouagadougou",
        current: false,
    },
    ExperienceItem {
        company: "Freelance",
        position: Localized {
            en: "Web Developer",
            fr: "Développeur Web",
        },
        description: Localized {
            en: "Built marketing sites and small business tools for local \
                 clients, from first mockup to hosting.",
            fr: "Réalisé des sites vitrines et de petits outils métier pour \
                 des clients locaux, de la première maquette à \
                 l'hébergement.",
        },
        technologies: &["HTML", "CSS", "JavaScript", "WordPress"],
        period: Localized {
            en: "2018 – 2020",
            fr: "2018 – 2020",
        },
        location: "Ouagadougou",
        current: false,
    },
];

pub struct SocialLink {
    pub name: &'static str,
    pub url: &'static str,
}

pub const SOCIAL_LINKS: [SocialLink; 3] = [
    SocialLink { name: "GitHub", url: "https://github.com/wmohamed" },
    SocialLink { name: "LinkedIn", url: "https://linkedin.com/in/wmohamed" },
    SocialLink { name: "Twitter", url: "https://twitter.com/wmohamed" },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nav_ids_are_unique() {
        for (i, a) in NAV_ITEMS.iter().enumerate() {
            for b in &NAV_ITEMS[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn every_skill_category_is_listed_in_all() {
        for skill in &SKILLS {
            assert!(SkillCategory::ALL.contains(&skill.category), "{}", skill.name);
        }
    }

    #[test]
    fn at_most_one_current_position() {
        let current = EXPERIENCE.iter().filter(|e| e.current).count();
        assert!(current <= 1);
    }
}
