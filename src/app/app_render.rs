use ratatui::{
    Frame,
    layout::{Constraint, Layout},
};

use super::app_state::App;
use super::footer_render;
use crate::multi_check::render_multi_check;

impl App {
    pub fn render(&mut self, frame: &mut Frame) {
        let [check_area, footer_area] =
            Layout::vertical([Constraint::Min(3), Constraint::Length(1)]).areas(frame.area());

        self.regions = render_multi_check(&self.multi_check, frame, check_area, true);
        footer_render::render_line(self, frame, footer_area);
    }
}
