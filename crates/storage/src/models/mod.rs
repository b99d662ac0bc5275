mod health_profile;

pub use health_profile::HealthProfile;
