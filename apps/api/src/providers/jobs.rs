use async_trait::async_trait;

use crate::models::job::JobPosting;

/// Source of job postings. Fetches may fail transiently; the engine keeps
/// its last-good corpus when they do.
///
/// Carried in `AppState` behind `Arc<dyn JobFeed>`.
#[async_trait]
pub trait JobFeed: Send + Sync {
    async fn fetch(&self) -> anyhow::Result<Vec<JobPosting>>;
}

/// Built-in feed returning a fixed set of postings. Stands in for the
/// aggregated external boards; an HTTP-backed feed implements the same
/// trait.
pub struct SeedJobFeed;

#[async_trait]
impl JobFeed for SeedJobFeed {
    async fn fetch(&self) -> anyhow::Result<Vec<JobPosting>> {
        Ok(seed_postings())
    }
}

fn posting(
    id: &str,
    title: &str,
    company: &str,
    location: &str,
    description: &str,
    skills: &[&str],
    created_at: &str,
) -> JobPosting {
    JobPosting {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        required_skills: skills.iter().map(|s| s.to_string()).collect(),
        company: company.to_string(),
        location: location.to_string(),
        url: format!("https://example.com/job/{id}"),
        created_at: created_at.to_string(),
    }
}

pub fn seed_postings() -> Vec<JobPosting> {
    vec![
        posting(
            "1",
            "Senior Python Developer",
            "Tech Corp",
            "San Francisco, CA",
            "We are looking for a Senior Python Developer with experience in Django and Flask frameworks. Must have knowledge of REST APIs and database design.",
            &["Python", "Django", "Flask", "REST API", "SQL", "PostgreSQL"],
            "2023-05-15",
        ),
        posting(
            "2",
            "Machine Learning Engineer",
            "AI Innovations",
            "New York, NY",
            "Join our team to build cutting-edge machine learning models. Experience with TensorFlow, PyTorch, and cloud platforms required.",
            &["Python", "Machine Learning", "TensorFlow", "PyTorch", "AWS", "Docker"],
            "2023-05-10",
        ),
        posting(
            "3",
            "Frontend Developer",
            "Web Solutions",
            "Remote",
            "Create responsive web applications using React and modern JavaScript. Experience with state management and testing frameworks.",
            &["JavaScript", "React", "HTML", "CSS", "Redux", "Jest"],
            "2023-05-12",
        ),
        posting(
            "4",
            "DevOps Engineer",
            "Cloud Systems",
            "Austin, TX",
            "Manage cloud infrastructure and CI/CD pipelines. Experience with Kubernetes, Docker, and monitoring tools required.",
            &["Docker", "Kubernetes", "CI/CD", "AWS", "Terraform", "Prometheus"],
            "2023-05-14",
        ),
        posting(
            "5",
            "Data Scientist",
            "Analytics Pro",
            "Boston, MA",
            "Analyze complex datasets and build predictive models. Proficiency in Python, R, and statistical analysis tools required.",
            &["Python", "R", "Statistics", "Pandas", "Scikit-learn", "Tableau"],
            "2023-05-11",
        ),
        posting(
            "6",
            "Full Stack Developer",
            "Startup Hub",
            "Seattle, WA",
            "Develop end-to-end web applications using modern technologies. Experience with Node.js, React, and MongoDB required.",
            &["JavaScript", "Node.js", "React", "MongoDB", "Express", "HTML/CSS"],
            "2023-05-13",
        ),
        posting(
            "7",
            "Cybersecurity Analyst",
            "SecureTech",
            "Washington, DC",
            "Protect organizational assets from cyber threats. Experience with security frameworks and incident response required.",
            &["Cybersecurity", "SIEM", "Firewalls", "Incident Response", "CISSP", "Python"],
            "2023-05-09",
        ),
        posting(
            "8",
            "Backend Engineer",
            "DataSystems",
            "Denver, CO",
            "Design and implement scalable backend services. Experience with microservices architecture and cloud platforms.",
            &["Python", "Java", "Microservices", "AWS", "Docker", "Kafka"],
            "2023-05-14",
        ),
    ]
}
