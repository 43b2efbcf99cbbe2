//! Static project and certificate catalog, compiled into the binary.

#[derive(Debug, PartialEq, Eq)]
pub struct ProjectRecord {
    pub id: &'static str,
    pub title: &'static str,
    pub date: &'static str,
    /// One-line summary used on the project card
    pub description: &'static str,
    pub full_description: &'static str,
    pub features: &'static [&'static str],
    pub technologies: &'static [&'static str],
    pub challenges: &'static str,
    pub outcome: &'static str,
}

#[derive(Debug, PartialEq, Eq)]
pub enum CertificateAsset {
    /// Embedded document viewer (PDF)
    Document { path: &'static str },
    Image {
        path: &'static str,
        alt: &'static str,
    },
}

impl CertificateAsset {
    pub fn path(&self) -> &'static str {
        match self {
            CertificateAsset::Document { path } | CertificateAsset::Image { path, .. } => *path,
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct CertificateRecord {
    pub id: &'static str,
    pub title: &'static str,
    pub asset: CertificateAsset,
}

pub static PROJECTS: &[ProjectRecord] = &[
    ProjectRecord {
        id: "project1",
        title: "Face and Motion Detection System",
        date: "Jan 2024 - Present",
        description: "A comprehensive computer vision project that implements real-time face and motion detection in video streams.",
        full_description: "This advanced computer vision system leverages machine learning algorithms to detect human faces and motion in real-time video streams. The project demonstrates expertise in computer vision, real-time processing, and optimization techniques.",
        features: &[
            "Real-time face detection using Haar cascades",
            "Motion detection using background subtraction techniques",
            "Optimized for live camera feed processing",
            "High accuracy and low latency performance",
            "Integration with TensorFlow for enhanced detection",
        ],
        technologies: &["Python", "TensorFlow", "OpenCV", "Computer Vision"],
        challenges: "Optimizing performance for real-time processing while maintaining high accuracy in various lighting conditions.",
        outcome: "Successfully deployed a robust system capable of processing live video feeds with minimal latency.",
    },
    ProjectRecord {
        id: "project2",
        title: "Weather Forecast Web App",
        date: "Jan 2025 - Present",
        description: "A responsive web application providing accurate weather forecasts using real-time API data.",
        full_description: "A modern, user-friendly weather forecasting application that fetches real-time weather data from OpenWeatherMap API and displays comprehensive 5-day forecasts with an intuitive interface.",
        features: &[
            "Real-time weather data fetching from OpenWeatherMap API",
            "Interactive 5-day weather forecast",
            "Dynamic UI updates based on weather conditions",
            "Location-based weather search",
            "Responsive design for all devices",
        ],
        technologies: &["HTML", "CSS", "JavaScript", "OpenWeatherMap API"],
        challenges: "Implementing smooth data updates and creating an intuitive UX that makes weather information easy to understand.",
        outcome: "Created a polished, production-ready weather app with excellent user experience and accurate forecasts.",
    },
    ProjectRecord {
        id: "project3",
        title: "SkillSwap - Skill Exchange Platform",
        date: "Dec 2024 - Present",
        description: "An innovative platform connecting people to exchange skills and learn from each other.",
        full_description: "SkillSwap is a full-stack web platform that uses AI to match users based on their skills and learning interests, creating a community-driven skill exchange ecosystem.",
        features: &[
            "AI-powered intelligent skill matching",
            "User profiles with skill listings",
            "Advanced search and filtering capabilities",
            "Real-time skill exchange requests",
            "Interactive user interface built with React.js",
        ],
        technologies: &["React.js", "Bolt AI", "HTML", "CSS", "JavaScript"],
        challenges: "Implementing intelligent matching algorithms and creating an engaging user experience for skill discovery.",
        outcome: "Built a functional platform that successfully connects users for mutually beneficial skill exchanges.",
    },
    ProjectRecord {
        id: "project4",
        title: "Image Captioning System",
        date: "Jan 2023 - Present",
        description: "A deep learning system that automatically generates descriptive captions for images.",
        full_description: "An end-to-end deep learning solution that combines computer vision and natural language processing to generate accurate, human-like captions for images. The system uses state-of-the-art CNN and LSTM architectures.",
        features: &[
            "CNN-based image feature extraction",
            "LSTM networks for caption generation",
            "Trained on COCO dataset",
            "State-of-the-art performance metrics",
            "Real-time caption generation capability",
        ],
        technologies: &["Python", "TensorFlow", "OpenCV", "Deep Learning", "NLP"],
        challenges: "Achieving high accuracy while generating contextually relevant and grammatically correct captions.",
        outcome: "Developed a robust system that generates high-quality captions with state-of-the-art performance on standard benchmarks.",
    },
];

pub static CERTIFICATES: &[CertificateRecord] = &[
    CertificateRecord {
        id: "sql",
        title: "Microsoft SQL Certification",
        asset: CertificateAsset::Document {
            path: "assets/certificates/intellipaat-certificate.pdf",
        },
    },
    CertificateRecord {
        id: "ai_ml",
        title: "Fundamentals in AI & ML",
        asset: CertificateAsset::Image {
            path: "assets/certificates/vityarth-9b78f4a5af.png",
            alt: "AI & ML Certificate",
        },
    },
    CertificateRecord {
        id: "python",
        title: "Python Essentials",
        asset: CertificateAsset::Image {
            path: "assets/certificates/vityarth-d878fcf4b7.png",
            alt: "Python Certificate",
        },
    },
];

pub fn project(id: &str) -> Option<&'static ProjectRecord> {
    PROJECTS.iter().find(|p| p.id == id)
}

pub fn certificate(id: &str) -> Option<&'static CertificateRecord> {
    CERTIFICATES.iter().find(|c| c.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_sizes() {
        assert_eq!(PROJECTS.len(), 4);
        assert_eq!(CERTIFICATES.len(), 3);
    }

    #[test]
    fn test_ids_are_unique() {
        for (i, p) in PROJECTS.iter().enumerate() {
            assert!(PROJECTS[i + 1..].iter().all(|q| q.id != p.id), "duplicate {}", p.id);
        }
        for (i, c) in CERTIFICATES.iter().enumerate() {
            assert!(CERTIFICATES[i + 1..].iter().all(|d| d.id != c.id), "duplicate {}", c.id);
        }
    }

    #[test]
    fn test_every_project_lists_five_features() {
        for p in PROJECTS {
            assert_eq!(p.features.len(), 5, "{}", p.id);
            assert!(!p.technologies.is_empty(), "{}", p.id);
        }
    }

    #[test]
    fn test_lookup() {
        assert_eq!(
            project("project3").map(|p| p.title),
            Some("SkillSwap - Skill Exchange Platform")
        );
        assert!(project("project5").is_none());
        assert_eq!(
            certificate("sql").map(|c| c.asset.path()),
            Some("assets/certificates/intellipaat-certificate.pdf")
        );
        assert!(certificate("rust").is_none());
    }
}
