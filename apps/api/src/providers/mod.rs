// External collaborators: the job feed and the trending-skills/salary
// source. The engine consumes these through narrow seams so real HTTP-backed
// providers can replace the shipped tables without touching the pipeline.

pub mod jobs;
pub mod trends;
