//! Job detail lookup. A stub with echo-id, fixed-body behavior: the id is
//! never checked against anything and every id gets the same canned record.

use chrono::Utc;

use crate::listings::models::JobDetail;

pub fn lookup_job_detail(id: &str) -> JobDetail {
    JobDetail {
        id: id.to_string(),
        title: "Senior Software Engineer".to_string(),
        company: "Tech Innovations Inc.".to_string(),
        location: "Remote".to_string(),
        description: "Exciting opportunity for an experienced software engineer to join our \
            dynamic team."
            .to_string(),
        requirements: vec![
            "5+ years of experience".to_string(),
            "Strong problem-solving skills".to_string(),
            "Team player".to_string(),
            "Excellent communication".to_string(),
        ],
        salary: "$100,000 - $150,000".to_string(),
        posted: Utc::now(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_is_echoed() {
        assert_eq!(lookup_job_detail("123").id, "123");
    }

    #[test]
    fn test_any_id_yields_same_body() {
        let a = lookup_job_detail("123");
        let b = lookup_job_detail("../../etc/passwd");
        assert_eq!(b.id, "../../etc/passwd");
        assert_eq!(a.title, b.title);
        assert_eq!(a.company, b.company);
        assert_eq!(a.requirements, b.requirements);
    }
}
