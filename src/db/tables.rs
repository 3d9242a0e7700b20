/// Users table: id -> (email, password_hash)
pub const USERS: &str = "users";

/// Progress documents: user_id (unique) -> progress_data (JSON text)
pub const USER_PROGRESS: &str = "user_progress";

/// Navigation documents: user_id (unique) -> navigation_data (JSON text)
pub const USER_NAVIGATION: &str = "user_navigation";

pub const PROGRESS_DATA: &str = "progress_data";

pub const NAVIGATION_DATA: &str = "navigation_data";
