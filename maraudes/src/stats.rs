use crate::data::{ActionStatus, OutreachAction};

/// Aggregates shown on an association's dashboard.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DashboardStats {
    pub total_actions: usize,
    pub active_actions: usize,
    pub completed_actions: usize,
    pub total_beneficiaries: u64,
}

impl DashboardStats {
    /// Active means planned or currently running.
    pub fn from_actions(actions: &[OutreachAction]) -> Self {
        DashboardStats {
            total_actions: actions.len(),
            active_actions: actions
                .iter()
                .filter(|action| {
                    matches!(
                        action.status,
                        ActionStatus::Planned | ActionStatus::InProgress
                    )
                })
                .count(),
            completed_actions: actions
                .iter()
                .filter(|action| action.status == ActionStatus::Completed)
                .count(),
            total_beneficiaries: actions
                .iter()
                .map(|action| u64::from(action.beneficiaries_helped))
                .sum(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn action(status: ActionStatus, beneficiaries: u32) -> OutreachAction {
        let mut action: OutreachAction = serde_json::from_value(serde_json::json!({
            "id": "action-1",
            "title": "Maraude",
            "latitude": 44.8378,
            "longitude": -0.5792,
            "isRecurring": true,
            "isActive": true,
            "startTime": "19:00",
            "status": "planned",
            "participantsCount": 2,
            "beneficiariesHelped": 0,
            "createdBy": "user-1",
            "associationId": "assoc-1"
        }))
        .unwrap();
        action.status = status;
        action.beneficiaries_helped = beneficiaries;
        action
    }

    #[test]
    fn counts_by_status_and_sums_beneficiaries() {
        let actions = vec![
            action(ActionStatus::Planned, 0),
            action(ActionStatus::InProgress, 12),
            action(ActionStatus::Completed, 25),
            action(ActionStatus::Cancelled, 0),
        ];
        let stats = DashboardStats::from_actions(&actions);
        assert_eq!(stats.total_actions, 4);
        assert_eq!(stats.active_actions, 2);
        assert_eq!(stats.completed_actions, 1);
        assert_eq!(stats.total_beneficiaries, 37);
    }

    #[test]
    fn empty_slice_yields_zeroed_stats() {
        assert_eq!(DashboardStats::from_actions(&[]), DashboardStats::default());
    }
}
