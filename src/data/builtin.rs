//! Built-in portfolio content.
//!
//! This is the default content set, used whenever no `--content` file is
//! given (or the given file cannot be loaded). Project ordering is
//! significant; records are identified by position.

use super::content::{
    ContactInfo, Content, EducationEntry, Profile, ProjectRecord, SkillCategory, SocialLink,
};

fn project(
    title: &str,
    thumbnail: &str,
    description: &str,
    stack: &str,
    preview: &str,
    details: &str,
) -> ProjectRecord {
    ProjectRecord {
        title: title.into(),
        thumbnail: thumbnail.into(),
        description: description.into(),
        stack: stack.into(),
        preview: preview.into(),
        details: details.into(),
    }
}

fn skills(category: &str, items: &[&str]) -> SkillCategory {
    SkillCategory {
        category: category.into(),
        items: items.iter().map(|s| s.to_string()).collect(),
    }
}

/// The default content set.
pub fn builtin() -> Content {
    Content {
        profile: Profile {
            name: "Nimesh Madusanka".into(),
            tagline: "Web Developer • UI/UX • MIS Undergraduate".into(),
            lead: "A passionate Web Developer, Designer, and MIS Undergraduate from \
                   Sri Lanka. I create impactful web experiences using modern technologies."
                .into(),
            note: "Currently pursuing BSc (Hons) in Management Information Systems.".into(),
            photo: "assets/profile.jpg".into(),
            cv: "assets/CV_Nimesh_Madusanka.pdf".into(),
            bio: "I'm Nimesh — a web developer and designer currently pursuing a BSc (Hons) \
                  in Management Information Systems. I enjoy building accessible, performant \
                  web apps and designing user-friendly interfaces."
                .into(),
            goals: "Currently in Year 2 of BSc (Hons) MIS. My goal is to become a full-stack \
                    developer and product-oriented designer who builds delightful user \
                    experiences."
                .into(),
        },
        skills: vec![
            skills(
                "Web Development",
                &["HTML", "CSS", "JavaScript", "React", "Next.js", "Node.js", "Express.js"],
            ),
            skills("Databases", &["MySQL", "PostgreSQL"]),
            skills("Design Tools", &["Figma", "Photoshop", "Illustrator"]),
            skills("Other", &["Git", "VS Code", "Project Management"]),
        ],
        projects: builtin_projects(),
        education: vec![
            EducationEntry {
                title: "BSc (Hons) in Management Information Systems — [University Name]".into(),
                subtitle: "Year 2 (Current)".into(),
                certificate: None,
            },
            EducationEntry {
                title: "Certifications".into(),
                subtitle: "Full-Stack Bootcamp (Udemy), React Essentials (Coursera)".into(),
                certificate: Some("images/certificate-sample.jpg".into()),
            },
        ],
        achievements: vec![
            "Completed Full-Stack Web Development Bootcamp".into(),
            "Top 10 in Innovation Challenge 2024".into(),
            "Published design on Behance".into(),
        ],
        contact: ContactInfo {
            age: 21,
            phone: "+94 77 123 4567".into(),
            email: "nimeshmadusanka@gmail.com".into(),
            links: vec![
                SocialLink {
                    label: "LinkedIn".into(),
                    url: "https://linkedin.com/in/yourprofile".into(),
                },
                SocialLink {
                    label: "GitHub".into(),
                    url: "https://github.com/yourprofile".into(),
                },
                SocialLink {
                    label: "Facebook".into(),
                    url: "https://facebook.com/yourprofile".into(),
                },
                SocialLink {
                    label: "Instagram".into(),
                    url: "https://instagram.com/yourprofile".into(),
                },
            ],
        },
    }
}

fn builtin_projects() -> Vec<ProjectRecord> {
    let core = [
        project(
            "Vehicle Marketplace",
            "assets/projects/vehicle-market-th.jpg",
            "A marketplace for vehicles with filters and user dashboards.",
            "Next.js • Node.js",
            "assets/projects/vehicle-preview.mp4",
            "Developed a full marketplace with user dashboard, real-time bidding, and \
             leasing integration.",
        ),
        project(
            "Hospital Management System",
            "assets/projects/hospital-th.jpg",
            "JSP based hospital admin & patient records system.",
            "JSP • MySQL",
            "assets/projects/hospital-preview.jpg",
            "Handles patient records, appointments, doctor schedules, and billing efficiently.",
        ),
        project(
            "UI/UX Dashboard",
            "assets/projects/dashboard-th.jpg",
            "Figma dashboard concept for analytics.",
            "Figma",
            "assets/projects/dashboard-preview.mp4",
            "A modern analytics dashboard design focused on clean data visualization.",
        ),
        project(
            "Portfolio Website",
            "assets/projects/portfolio-th.jpg",
            "Personal portfolio built using HTML, CSS, and React.",
            "React.js • TailwindCSS",
            "assets/projects/portfolio-preview.jpg",
            "Showcases skills, contact info, and projects in a modern layout.",
        ),
        project(
            "Student Management System",
            "assets/projects/student-th.jpg",
            "Web app for student records management.",
            "PHP • MySQL",
            "assets/projects/student-preview.jpg",
            "Used by schools to manage student data, attendance, and grades.",
        ),
        project(
            "E-commerce App",
            "assets/projects/ecommerce-th.jpg",
            "Online shopping platform with cart system.",
            "React.js • Node.js",
            "assets/projects/ecommerce-preview.mp4",
            "Full e-commerce app with payment gateway and order tracking.",
        ),
        project(
            "Chat Application",
            "assets/projects/chat-th.jpg",
            "Real-time chat system with sockets.",
            "React.js • Socket.io",
            "assets/projects/chat-preview.mp4",
            "Supports private and group chats with media sharing.",
        ),
        project(
            "Weather App",
            "assets/projects/weather-th.jpg",
            "Displays real-time weather data.",
            "React.js • OpenWeather API",
            "assets/projects/weather-preview.jpg",
            "Fetches and displays accurate weather information globally.",
        ),
        project(
            "Task Manager",
            "assets/projects/task-th.jpg",
            "Organize tasks and deadlines efficiently.",
            "Vue.js • Firebase",
            "assets/projects/task-preview.jpg",
            "Productivity app to manage daily tasks and reminders.",
        ),
        project(
            "Blog Platform",
            "assets/projects/blog-th.jpg",
            "Simple blogging system.",
            "Node.js • Express",
            "assets/projects/blog-preview.jpg",
            "Users can write, edit, and publish blogs with markdown support.",
        ),
        project(
            "Inventory Management",
            "assets/projects/inventory-th.jpg",
            "Manages stock and orders.",
            "Laravel • MySQL",
            "assets/projects/inventory-preview.jpg",
            "For shops to monitor products, stock levels, and suppliers.",
        ),
    ];

    // The core set fills the first two pages; the one-offs spill onto a third.
    let mut projects: Vec<ProjectRecord> = core.iter().cloned().chain(core.iter().cloned()).collect();

    projects.extend([
        project(
            "Finance Tracker",
            "assets/projects/finance-th.jpg",
            "Track income and expenses visually.",
            "React.js • Chart.js",
            "assets/projects/finance-preview.jpg",
            "Includes graphs for better financial planning.",
        ),
        project(
            "Travel Booking App",
            "assets/projects/travel-th.jpg",
            "Book trips and hotels easily.",
            "Next.js • MongoDB",
            "assets/projects/travel-preview.mp4",
            "Allows users to plan vacations with interactive maps.",
        ),
        project(
            "Online Exam Portal",
            "assets/projects/exam-th.jpg",
            "Conduct and evaluate exams online.",
            "Spring Boot • MySQL",
            "assets/projects/exam-preview.jpg",
            "Auto-evaluation and instant result generation.",
        ),
        project(
            "Restaurant Ordering System",
            "assets/projects/restaurant-th.jpg",
            "Online food ordering app.",
            "Django • SQLite",
            "assets/projects/restaurant-preview.jpg",
            "Enables online menu viewing and order tracking.",
        ),
        project(
            "Portfolio V2",
            "assets/projects/portfolio2-th.jpg",
            "Next version of personal portfolio.",
            "React • TailwindCSS",
            "assets/projects/portfolio2-preview.jpg",
            "Enhanced animations, dark mode, and SEO optimized.",
        ),
    ]);

    projects
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::pagination::{Pagination, PROJECTS_PER_PAGE};

    #[test]
    fn test_builtin_project_count() {
        // 11 core + 11 repeated + 5 one-offs: three pages at 12 per page
        let content = builtin();
        assert_eq!(content.projects.len(), 27);

        let p = Pagination::new(content.projects.len(), PROJECTS_PER_PAGE);
        assert_eq!(p.total_pages(), 3);
    }

    #[test]
    fn test_builtin_has_all_sections() {
        let content = builtin();
        assert_eq!(content.skills.len(), 4);
        assert_eq!(content.education.len(), 2);
        assert_eq!(content.achievements.len(), 3);
        assert_eq!(content.contact.links.len(), 4);
        assert!(content.education.iter().any(|e| e.certificate.is_some()));
    }
}
