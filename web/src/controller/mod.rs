pub(crate) mod health_check_controller;
pub(crate) mod movie_controller;
pub(crate) mod person_controller;
