// Read-only catalog endpoints: skills, jobs and a user's declared skills.

pub mod handlers;
