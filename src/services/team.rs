//! Team membership helpers: which technicians fit a team type.

use crate::models::team::TeamType;
use crate::models::user::User;

/// Users eligible for a team of `team_type`.
///
/// Only technicians and managers qualify. For team types with a department
/// list, a user matches when their department contains any listed department
/// (case-insensitive); users without a department never match. `Other` has no
/// department restriction.
pub fn eligible_members(team_type: TeamType, users: &[User]) -> Vec<&User> {
    let departments: Vec<String> = team_type
        .relevant_departments()
        .iter()
        .map(|d| d.to_lowercase())
        .collect();

    users
        .iter()
        .filter(|u| u.role.can_join_team())
        .filter(|u| {
            if departments.is_empty() {
                return true;
            }
            u.department.as_deref().is_some_and(|dept| {
                let dept = dept.to_lowercase();
                departments.iter().any(|d| dept.contains(d.as_str()))
            })
        })
        .collect()
}
