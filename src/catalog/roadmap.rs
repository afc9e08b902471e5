//! Static per-role roadmap text for the PDF report

const DATA_ANALYST_ROADMAP: &str = "\
3-Month Roadmap:
---------------------
Month 1:
- Master advanced Excel functions and pivot tables.
- Practice writing SQL queries for data extraction and aggregation.

Month 2:
- Build interactive dashboards in Power BI.
- Complete a data cleaning project using Python (pandas).

Month 3:
- Work on a case study combining Excel, SQL, and Power BI.
- Prepare a presentation to showcase your analysis.";

const DATA_SCIENTIST_ROADMAP: &str = "\
3-Month Roadmap:
---------------------
Month 1:
- Study supervised and unsupervised algorithms with scikit-learn.
- Review core statistics: probability, regression, distributions.

Month 2:
- Build a machine learning model using scikit-learn.
- Learn neural networks basics and experiment with simple deep learning.

Month 3:
- Complete an end-to-end data science project.
- Document your workflow and prepare to present your findings.";

/// Roadmap text for a role, with a fallback for roles that have none
pub fn roadmap_for(role: &str) -> &'static str {
    match role {
        "Data Analyst" => DATA_ANALYST_ROADMAP,
        "Data Scientist" => DATA_SCIENTIST_ROADMAP,
        _ => "No roadmap available.",
    }
}
