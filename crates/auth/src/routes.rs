//! Route path constants.
//!
//! Use these for navigation and guard decisions; the surrounding routing
//! layer owns the actual route table.

use skeletor_core::ExampleId;

pub const LOGIN: &str = "/login";
pub const APP: &str = "/app";
pub const DASHBOARD: &str = "/app/dashboard";
pub const EXAMPLE: &str = "/app/example";
pub const ADMIN: &str = "/app/admin";

/// Detail route for a specific example record.
pub fn example_detail(id: &ExampleId) -> String {
    format!("{EXAMPLE}/{id}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_route_embeds_the_id() {
        let id = ExampleId::from_raw("42");
        assert_eq!(example_detail(&id), "/app/example/42");
    }
}
