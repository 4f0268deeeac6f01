//! Static page content.
//!
//! Everything rendered by the sections is a compile-time record; nothing
//! here is created or mutated at runtime. Ids are unique within their own
//! list and lists are never reordered.

pub const SITE_OWNER: &str = "Min Set Ko";
pub const OWNER_ROLE: &str = "Security Analyst Trainee";
pub const HERO_HEADLINE: &str = "> Min Set Ko";

pub const LINKEDIN_URL: &str = "https://www.linkedin.com/in/min-set-ko-4342121b6";
pub const TRYHACKME_BADGE_URL: &str =
    "https://tryhackme.com/api/v2/badges/public-profile?userPublicId=884096";
pub const TRYHACKME_USER_ID: &str = "884096";

pub const CV_HREF: &str = "/cv.pdf";
pub const CV_DOWNLOAD_NAME: &str = "Min_Set_Ko_CV.pdf";

/// A navigable section: link label plus the fragment id of its element.
///
/// An anchor with no matching element makes the jump a silent no-op.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub name: &'static str,
    pub anchor: &'static str,
}

pub const NAV_LINKS: &[NavLink] = &[
    NavLink {
        name: "Projects",
        anchor: "projects",
    },
    NavLink {
        name: "Homelab",
        anchor: "homelab",
    },
    NavLink {
        name: "Certifications",
        anchor: "certifications",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub tags: &'static [&'static str],
    /// Tailwind gradient stops for the card glow.
    pub accent: &'static str,
}

pub const PROJECTS: &[Project] = &[
    Project {
        id: 1,
        title: "IoT Biometric Pulse & Oxygen Tracker",
        description: "Developed a biometric monitoring system using a Raspberry Pi and a Pulse \
                      Oximeter sensor to capture and analyze real-time heart rate and oxygen \
                      saturation (SpO2) data.",
        image: "images/BiometricSensorProj.jpeg",
        tags: &["Raspberry Pi", "IoT", "Python", "Sensors"],
        accent: "from-emerald-500/20 to-teal-500/20",
    },
    Project {
        id: 2,
        title: "Adaptive Seismic Alert System",
        description: "Successfully pivoted from a sign-language translation glove to a functional \
                      earthquake detector in under 48 hours after hardware failure. Re-engineered \
                      motion sensors and hardware logic to meet presentation requirements.",
        image: "images/earthquakeDetector.jpeg",
        tags: &["Hardware", "Arduino", "C++", "Rapid Prototyping"],
        accent: "from-blue-500/20 to-cyan-500/20",
    },
    Project {
        id: 3,
        title: "Projekti Honeypot",
        description: "Led a team of six to architect a multi-node honeynet using Cowrie, \
                      Suricata, and OpenWrt, conducting a full-scale Red Team/Blue Team \
                      simulation to analyze real-time intrusion detection and adversary \
                      behavior.",
        image: "images/honeyPot.jpeg",
        tags: &["Cybersecurity", "Honeypot", "Suricata", "Team Lead"],
        accent: "from-red-500/20 to-orange-500/20",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Certification {
    pub id: u32,
    pub name: &'static str,
    pub issuer: &'static str,
    pub image: &'static str,
    pub date: &'static str,
    pub category: &'static str,
    pub description: &'static str,
}

pub const CERTIFICATIONS: &[Certification] = &[
    Certification {
        id: 1,
        name: "Fortinet NSE3",
        issuer: "Fortinet",
        image: "certs/Fortinet_NSE3.jpeg",
        date: "2026",
        category: "Network Security",
        description: "Network Security Expert certification demonstrating expertise in Fortinet \
                      security solutions.",
    },
    Certification {
        id: 2,
        name: "AWS Cloud Practitioner Essentials",
        issuer: "Amazon Web Services",
        image: "certs/aws_cert.jpeg",
        date: "2025",
        category: "Cloud Computing",
        description: "Foundational cloud computing knowledge and AWS services understanding.",
    },
    Certification {
        id: 3,
        name: "Cisco Introduction to Cybersecurity",
        issuer: "Cisco",
        image: "certs/Cisco_CysaIntro.jpeg",
        date: "2025",
        category: "Cybersecurity",
        description: "Comprehensive introduction to cybersecurity concepts and best practices.",
    },
    Certification {
        id: 4,
        name: "Junction Hackathon 2025",
        issuer: "Junction",
        image: "certs/junctionHackathonCertificate.jpeg",
        date: "2025",
        category: "Hackathon",
        description: "Participation in one of Europe's largest hackathon events.",
    },
    Certification {
        id: 5,
        name: "Google Prompting Essentials",
        issuer: "Google",
        image: "certs/googleprompting.jpeg",
        date: "2026",
        category: "AI/ML",
        description: "Mastering effective prompt engineering for large language models.",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HomelabFeature {
    pub title: &'static str,
    pub description: &'static str,
}

pub const HOMELAB_FEATURES: &[HomelabFeature] = &[
    HomelabFeature {
        title: "Real-time Monitoring",
        description: "Live attack surface visualization",
    },
    HomelabFeature {
        title: "Global Honeypot",
        description: "Multi-node deployment worldwide",
    },
    HomelabFeature {
        title: "Security Analysis",
        description: "Deep packet inspection",
    },
    HomelabFeature {
        title: "Log Management",
        description: "Centralized Elasticsearch logging",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HomelabStat {
    pub label: &'static str,
    pub value: &'static str,
}

pub const HOMELAB_STATS: &[HomelabStat] = &[
    HomelabStat {
        label: "Containers",
        value: "20+",
    },
    HomelabStat {
        label: "Attack Types",
        value: "50+",
    },
    HomelabStat {
        label: "Uptime",
        value: "99.9%",
    },
    HomelabStat {
        label: "Logs/Day",
        value: "10K+",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SocialLink {
    pub name: &'static str,
    pub href: &'static str,
    /// Short glyph shown inside the square footer button.
    pub glyph: &'static str,
}

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        name: "GitHub",
        href: "https://github.com/eurusfox-24",
        glyph: "GH",
    },
    SocialLink {
        name: "LinkedIn",
        href: LINKEDIN_URL,
        glyph: "IN",
    },
    SocialLink {
        name: "Email",
        href: "mailto:minnsetko@gmail.com",
        glyph: "@",
    },
];

#[cfg(test)]
mod tests {
    use super::{CERTIFICATIONS, NAV_LINKS, PROJECTS};
    use std::collections::HashSet;

    #[test]
    fn project_ids_are_unique() {
        let ids: HashSet<u32> = PROJECTS.iter().map(|project| project.id).collect();
        assert_eq!(ids.len(), PROJECTS.len());
    }

    #[test]
    fn certification_ids_are_unique() {
        let ids: HashSet<u32> = CERTIFICATIONS.iter().map(|cert| cert.id).collect();
        assert_eq!(ids.len(), CERTIFICATIONS.len());
    }

    #[test]
    fn nav_links_target_the_known_sections() {
        let anchors: Vec<&str> = NAV_LINKS.iter().map(|link| link.anchor).collect();
        assert_eq!(anchors, vec!["projects", "homelab", "certifications"]);
    }

    #[test]
    fn every_card_has_an_image_path() {
        assert!(PROJECTS.iter().all(|project| !project.image.is_empty()));
        assert!(CERTIFICATIONS.iter().all(|cert| !cert.image.is_empty()));
    }
}
