pub mod farm_employee_stats;
pub mod farms;
pub mod notices;
pub mod site_visits;
pub mod statements;
pub mod users;
