// One handler module per resource; each handler adapts a single HTTP
// request into one data layer call and maps the outcome to a status code.
pub mod assignments;
pub mod attendance;
pub mod courses;
pub mod enrollments;
pub mod lessons;
pub mod messages;
pub mod resources;
pub mod submissions;
pub mod users;
