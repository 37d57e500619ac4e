//! Bilingual interface copy.
//!
//! Every user-visible string lives here as a static English/French pair;
//! views select with the active [`Language`] and never hardcode copy.

use crate::prefs::Language;

/// An English/French pair.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Localized<T: 'static> {
    pub en: T,
    pub fr: T,
}

impl<T: Copy> Localized<T> {
    pub const fn get(&self, lang: Language) -> T {
        match lang {
            Language::En => self.en,
            Language::Fr => self.fr,
        }
    }
}

pub struct HeroText {
    pub greeting: &'static str,
    pub tagline: &'static str,
    pub cta_contact: &'static str,
    pub cta_about: &'static str,
}

pub struct AboutText {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub paragraphs: [&'static str; 2],
    pub location_label: &'static str,
    pub experience_label: &'static str,
    pub experience_value: &'static str,
    pub languages_label: &'static str,
    pub languages_value: &'static str,
}

pub struct SkillsText {
    pub title: &'static str,
    pub subtitle: &'static str,
}

pub struct ExperienceText {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub current_badge: &'static str,
}

pub struct ContactText {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub description: &'static str,
    pub info_title: &'static str,
    pub name_label: &'static str,
    pub name_placeholder: &'static str,
    pub email_label: &'static str,
    pub email_placeholder: &'static str,
    pub subject_label: &'static str,
    pub subject_placeholder: &'static str,
    pub message_label: &'static str,
    pub message_placeholder: &'static str,
    pub send: &'static str,
    pub opening_mail_client: &'static str,
    pub copy_email: &'static str,
    pub email_copied: &'static str,
    pub copy_failed: &'static str,
    pub social_title: &'static str,
}

pub struct FooterText {
    pub rights: &'static str,
    pub built_with: &'static str,
}

pub struct UiText {
    pub hero: HeroText,
    pub about: AboutText,
    pub skills: SkillsText,
    pub experience: ExperienceText,
    pub contact: ContactText,
    pub footer: FooterText,
}

/// The full dictionary for the active language.
pub fn ui_text(lang: Language) -> &'static UiText {
    match lang {
        Language::En => &EN,
        Language::Fr => &FR,
    }
}

static EN: UiText = UiText {
    hero: HeroText {
        greeting: "Hi, I'm",
        tagline: "I build fast, accessible web applications from front to back.",
        cta_contact: "Get in touch",
        cta_about: "Learn more",
    },
    about: AboutText {
        title: "About Me",
        subtitle: "A few words about who I am and how I work",
        paragraphs: [
            "I'm a full-stack developer who enjoys turning rough ideas into \
             polished products. My focus is on web applications that stay \
             fast and pleasant to use as they grow.",
            "When I'm not coding I mentor junior developers, contribute to \
             open source, and experiment with creative coding and \
             interactive graphics.",
        ],
        location_label: "Location",
        experience_label: "Experience",
        experience_value: "5+ years",
        languages_label: "Languages",
        languages_value: "English, French",
    },
    skills: SkillsText {
        title: "Skills",
        subtitle: "Technologies I work with every day",
    },
    experience: ExperienceText {
        title: "Experience",
        subtitle: "Where I've worked and what I did there",
        current_badge: "Current",
    },
    contact: ContactText {
        title: "Get In Touch",
        subtitle: "Let's discuss your next project or opportunity",
        description: "I'm always interested in new opportunities and \
                      exciting projects. Whether you have a question or just \
                      want to say hi, I'll do my best to get back to you!",
        info_title: "Contact Information",
        name_label: "Your Name",
        name_placeholder: "Enter your full name",
        email_label: "Your Email",
        email_placeholder: "Enter your email address",
        subject_label: "Subject",
        subject_placeholder: "What's this about?",
        message_label: "Your Message",
        message_placeholder: "Tell me about your project or inquiry...",
        send: "Send Message",
        opening_mail_client: "Your email client will open with the message pre-filled.",
        copy_email: "Copy email address",
        email_copied: "Email address copied to clipboard.",
        copy_failed: "Could not copy automatically — please copy the address manually:",
        social_title: "Connect with me",
    },
    footer: FooterText {
        rights: "All rights reserved.",
        built_with: "Built with Rust and Dioxus",
    },
};

static FR: UiText = UiText {
    hero: HeroText {
        greeting: "Bonjour, je suis",
        tagline: "Je construis des applications web rapides et accessibles, \
                  du front au back.",
        cta_contact: "Me contacter",
        cta_about: "En savoir plus",
    },
    about: AboutText {
        title: "À Propos",
        subtitle: "Quelques mots sur qui je suis et comment je travaille",
        paragraphs: [
            "Je suis un développeur full-stack qui aime transformer des \
             idées brutes en produits aboutis. Je me concentre sur des \
             applications web qui restent rapides et agréables à utiliser \
             en grandissant.",
            "Quand je ne code pas, j'accompagne des développeurs juniors, \
             je contribue à l'open source et j'expérimente avec le code \
             créatif et les graphismes interactifs.",
        ],
        location_label: "Localisation",
        experience_label: "Expérience",
        experience_value: "5+ ans",
        languages_label: "Langues",
        languages_value: "Anglais, Français",
    },
    skills: SkillsText {
        title: "Compétences",
        subtitle: "Les technologies que j'utilise au quotidien",
    },
    experience: ExperienceText {
        title: "Expérience",
        subtitle: "Où j'ai travaillé et ce que j'y ai fait",
        current_badge: "Actuel",
    },
    contact: ContactText {
        title: "Contactez-Moi",
        subtitle: "Discutons de votre prochain projet ou opportunité",
        description: "Je suis toujours intéressé par de nouvelles \
                      opportunités et des projets passionnants. Que vous \
                      ayez une question ou que vous souhaitiez simplement \
                      dire bonjour, je ferai de mon mieux pour vous \
                      répondre !",
        info_title: "Informations de Contact",
        name_label: "Votre Nom",
        name_placeholder: "Entrez votre nom complet",
        email_label: "Votre Email",
        email_placeholder: "Entrez votre adresse email",
        subject_label: "Sujet",
        subject_placeholder: "De quoi s'agit-il ?",
        message_label: "Votre Message",
        message_placeholder: "Parlez-moi de votre projet ou demande...",
        send: "Envoyer le Message",
        opening_mail_client: "Votre client email va s'ouvrir avec le message pré-rempli.",
        copy_email: "Copier l'adresse email",
        email_copied: "Adresse email copiée dans le presse-papiers.",
        copy_failed: "Copie automatique impossible — veuillez copier l'adresse manuellement :",
        social_title: "Connectez-vous avec moi",
    },
    footer: FooterText {
        rights: "Tous droits réservés.",
        built_with: "Construit avec Rust et Dioxus",
    },
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_dictionaries_are_complete() {
        for lang in Language::SUPPORTED {
            let t = ui_text(lang);
            for s in [
                t.hero.greeting,
                t.hero.tagline,
                t.about.title,
                t.skills.title,
                t.experience.title,
                t.contact.title,
                t.contact.send,
                t.footer.rights,
            ] {
                assert!(!s.trim().is_empty(), "{lang}: empty copy");
            }
        }
    }

    #[test]
    fn dictionaries_differ_between_languages() {
        assert_ne!(ui_text(Language::En).contact.title, ui_text(Language::Fr).contact.title);
    }

    #[test]
    fn localized_pairs_select_by_language() {
        let pair = Localized { en: "hello", fr: "bonjour" };
        assert_eq!(pair.get(Language::En), "hello");
        assert_eq!(pair.get(Language::Fr), "bonjour");
    }
}
