//! Static page content
//!
//! Every list the page renders. Nothing here is mutated at runtime; ids are
//! unique within their own list.

use crate::models::types::{
    Achievement, ContactChannel, GalleryImage, HeroCopy, ImageRef, NavItem, Project, Service,
    SocialLink,
};
use crate::utils::constants::{
    ANCHOR_ABOUT, ANCHOR_ACHIEVEMENTS, ANCHOR_CONTACT, ANCHOR_GALLERY, ANCHOR_HOME,
    ANCHOR_PROJECTS, ANCHOR_SERVICES,
};

pub static HERO: HeroCopy = HeroCopy {
    greeting: "Hello, I'm",
    name: "Praveen M Sadalgi",
    headline: "Full Stack Developer &",
    highlight: "Hackathon Champion",
    pitch: "Building modern web applications with a focus on user experience, \
            performance and scalability. Let's create something amazing together.",
    portrait: ImageRef("images/hero-portrait.jpg"),
};

pub static NAV_ITEMS: &[NavItem] = &[
    NavItem { name: "Home", anchor: ANCHOR_HOME },
    NavItem { name: "About", anchor: ANCHOR_ABOUT },
    NavItem { name: "Achievements", anchor: ANCHOR_ACHIEVEMENTS },
    NavItem { name: "Projects", anchor: ANCHOR_PROJECTS },
    NavItem { name: "Gallery", anchor: ANCHOR_GALLERY },
    NavItem { name: "Services", anchor: ANCHOR_SERVICES },
    NavItem { name: "Contact", anchor: ANCHOR_CONTACT },
];

/// About section badges
pub static ABOUT_ROLES: &[&str] = &["BCA Student", "Full Stack Developer"];

pub static ABOUT_PARAGRAPHS: &[&str] = &[
    "I'm a passionate Full Stack Developer and BCA student with a proven track record \
     of success in hackathons and web development competitions. I love tackling complex \
     problems and turning ideas into reality through clean, efficient code and \
     intuitive user experiences.",
    "My journey in technology is driven by continuous learning and a desire to create \
     impactful digital solutions that make a difference.",
];

pub static TECH_STACK: &[&str] = &[
    "HTML", "CSS", "JavaScript", "ReactJS", "NextJS", "NodeJS", "MongoDB", "MySQL",
];

pub static ACHIEVEMENTS: &[Achievement] = &[
    Achievement {
        title: "Winner",
        event: "KLE BCA Web Dev (Gokak)",
        description: "Recognized for creating the most innovative and functional web application.",
    },
    Achievement {
        title: "Winner",
        event: "KLE BCA Hackathon",
        description: "Led a team to victory with a cutting-edge solution to a real-world problem.",
    },
    Achievement {
        title: "Winner",
        event: "Jain Engineering College Hackathon",
        description: "Developed a standout project that impressed judges and industry professionals.",
    },
    Achievement {
        title: "Winner",
        event: "Agadi College Hackathon",
        description: "Created an innovative solution that addressed key challenges in the presented problem statement.",
    },
    Achievement {
        title: "Winner",
        event: "Technova (KLE Cluster)",
        description: "Showcased technical excellence and creativity to win the prestigious tech competition.",
    },
    Achievement {
        title: "Winner",
        event: "KLE BCA Chikodi Presentation",
        description: "Delivered an outstanding presentation that earned first place recognition.",
    },
];

pub static PROJECTS: &[Project] = &[
    Project {
        title: "QR Code Generator",
        description: "A simple yet powerful QR code generator built with pure HTML, CSS, and JavaScript.",
        image: Some(ImageRef("images/project-qr.avif")),
        tech_stack: &["HTML", "CSS", "JavaScript"],
        github: Some("https://github.com/PraveenSadalgi/QR-code-generator/"),
        live: Some("https://qr-code-generator-sigma-gray.vercel.app/"),
    },
    Project {
        title: "Electric Bill Estimator",
        description: "Calculate and estimate electricity bills based on usage patterns and rates.",
        image: Some(ImageRef("images/project-bill.avif")),
        tech_stack: &["React", "JavaScript", "CSS"],
        github: Some("https://github.com/PraveenSadalgi/Electronic-Bill-Estimator"),
        live: Some("https://electronic-bill-estimator.vercel.app/"),
    },
    Project {
        title: "Future Ready Prep",
        description: "A platform to help students prepare for interviews and assessments.",
        image: Some(ImageRef("images/project-prep.jpg")),
        tech_stack: &["React", "Node.js", "MongoDB"],
        github: Some("https://github.com/PraveenSadalgi/future-ready-prep-23"),
        live: Some("https://future-ready-prep-23.vercel.app/"),
    },
    Project {
        title: "Agri-nexus-Northeast",
        description: "A solution connecting farmers with resources and markets in the Northeast.",
        image: Some(ImageRef("images/project-agri.jpg")),
        tech_stack: &["Next.js", "Tailwind CSS", "Node.js"],
        github: Some("https://github.com/PraveenSadalgi/agri-bridge-northeast"),
        live: Some("https://agrobridge-northeast.vercel.app/"),
    },
    Project {
        title: "OneShield",
        description: "A comprehensive security solution for digital assets (In Development).",
        image: None,
        tech_stack: &["React", "TypeScript", "Express.js", "MongoDB"],
        github: None,
        live: None,
    },
];

pub static GALLERY: &[GalleryImage] = &[
    GalleryImage {
        id: 1,
        thumbnail: ImageRef("images/gallery-web-dev.jpg"),
        title: "KLE BCA Web Dev Winner",
        description: "Receiving the first place award at the KLE BCA Web Development competition, \
                      where our innovative approach to responsive design earned recognition.",
        category: "awards",
    },
    GalleryImage {
        id: 2,
        thumbnail: ImageRef("images/gallery-hackathon.jpg"),
        title: "Winner KLE BCA Hackathon, Chikodi, Karnataka",
        description: "Winning the KLE BCA Hackathon with our team, where we developed a \
                      cutting-edge AI solution to enhance the way of learning for students.",
        category: "awards",
    },
    GalleryImage {
        id: 3,
        thumbnail: ImageRef("images/gallery-team.jpg"),
        title: "Team Celebration",
        description: "Celebrating our victory with the team after winning the Technova competition \
                      with our AI-powered accessibility solution for visually impaired users.",
        category: "awards",
    },
    GalleryImage {
        id: 4,
        thumbnail: ImageRef("images/gallery-ceremony.jpg"),
        title: "Award Ceremony",
        description: "Showcasing our project to the judges at Jain Engineering College Hackathon. \
                      We built a blockchain-based solution for secure digital credential verification.",
        category: "awards",
    },
    GalleryImage {
        id: 5,
        thumbnail: ImageRef("images/gallery-showcase.jpg"),
        title: "Project Showcase",
        description: "Being recognized at the award ceremony of Agadi College Hackathon for developing \
                      an innovative mobile application that helps connect local farmers to consumers.",
        category: "projects",
    },
    GalleryImage {
        id: 6,
        thumbnail: ImageRef("images/gallery-certificate.jpg"),
        title: "Certificate Reception",
        description: "Receiving a certificate of achievement at the KLE BCA event for outstanding \
                      contributions to web development innovation and community service.",
        category: "awards",
    },
];

pub static SERVICES: &[Service] = &[
    Service {
        icon: "💻",
        title: "Website & Web App Development",
        description: "Custom websites and web applications built with modern technologies to meet your specific needs.",
    },
    Service {
        icon: "🚀",
        title: "Portfolio & Resume Website Building",
        description: "Professional portfolio websites to showcase your skills, projects, and achievements.",
    },
    Service {
        icon: "👨‍💼",
        title: "Interview Prep & Mentorship",
        description: "Personalized guidance and preparation for technical interviews and career advancement.",
    },
    Service {
        icon: "⚛️",
        title: "Full Stack App Development",
        description: "End-to-end application development with both frontend and backend expertise.",
    },
    Service {
        icon: "🗄️",
        title: "Database Design (MongoDB / MySQL)",
        description: "Efficient and scalable database solutions designed for optimal performance.",
    },
    Service {
        icon: "🔧",
        title: "Job-Prep Tools & Dashboards",
        description: "Custom tools and dashboards to help you prepare and track your job search progress.",
    },
];

pub static CONTACT_CHANNELS: &[ContactChannel] = &[
    ContactChannel {
        icon: "📱",
        title: "Phone",
        value: "+91 8310125397",
        link: "tel:+918310125397",
    },
    ContactChannel {
        icon: "📧",
        title: "Email",
        value: "praveensadalgi@gmail.com",
        link: "mailto:praveensadalgi@gmail.com",
    },
    ContactChannel {
        icon: "📍",
        title: "Address",
        value: "Basav Nagar, Gokak, Karnataka",
        link: "https://maps.google.com/?q=Basav+Nagar+Gokak+Karnataka",
    },
    ContactChannel {
        icon: "🔗",
        title: "GitHub",
        value: "github.com/PraveenSadalgi",
        link: "https://github.com/PraveenSadalgi",
    },
    ContactChannel {
        icon: "💼",
        title: "LinkedIn",
        value: "LinkedIn Profile",
        link: "https://linkedin.com/in/praveensadalgi",
    },
];

pub static SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        name: "GitHub",
        url: "https://github.com/PraveenSadalgi",
        icon: "github",
    },
    SocialLink {
        name: "LinkedIn",
        url: "https://linkedin.com/in/praveensadalgi",
        icon: "linkedin",
    },
    SocialLink {
        name: "Email",
        url: "mailto:praveensadalgi@gmail.com",
        icon: "mail",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::constants::SECTION_ORDER;
    use std::collections::HashSet;

    #[test]
    fn test_gallery_ids_unique() {
        let ids: HashSet<u32> = GALLERY.iter().map(|img| img.id).collect();
        assert_eq!(ids.len(), GALLERY.len());
    }

    #[test]
    fn test_nav_follows_section_order() {
        let anchors: Vec<&str> = NAV_ITEMS.iter().map(|item| item.anchor).collect();
        assert_eq!(anchors, SECTION_ORDER);
    }

    #[test]
    fn test_outbound_links_have_schemes() {
        for channel in CONTACT_CHANNELS {
            assert!(
                channel.link.starts_with("tel:")
                    || channel.link.starts_with("mailto:")
                    || channel.link.starts_with("https://"),
                "unexpected link {}",
                channel.link
            );
        }
    }

    #[test]
    fn test_projects_without_image_exist() {
        assert!(PROJECTS.iter().any(|p| p.image.is_none()));
        assert!(PROJECTS.iter().all(|p| !p.tech_stack.is_empty()));
    }
}
