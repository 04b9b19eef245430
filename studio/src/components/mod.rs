pub mod chat_area;
pub mod error_notification;
pub mod feedback_modal;
pub mod input_box;
pub mod message_feedback;
pub mod plan_panel;
pub mod scene_actions;
pub mod script_card;
pub mod sidebar;
pub mod storyboard_card;
pub mod task_planning_card;
pub mod test_panel;
pub mod top_bar;
pub mod video_planning_card;
