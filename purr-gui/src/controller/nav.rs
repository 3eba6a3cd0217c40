use druid::{commands, widget::prelude::*, widget::Controller};

use crate::{
    cmd,
    data::{AppState, BackNav},
};

/// Sole mutator of the navigation state. Mounted at the root of the widget
/// tree so it sees commands from the cards, the top bar and the menu alike.
pub struct NavController;

impl NavController {
    fn navigate_back(&self, ctx: &mut EventCtx, data: &mut AppState) {
        if let BackNav::NotConsumed = data.navigate_back() {
            // Nothing left to collapse, hand the back action to the shell.
            log::debug!("back not consumed, closing the window");
            ctx.submit_command(commands::CLOSE_WINDOW);
        }
    }
}

impl<W> Controller<AppState, W> for NavController
where
    W: Widget<AppState>,
{
    fn event(
        &mut self,
        child: &mut W,
        ctx: &mut EventCtx,
        event: &Event,
        data: &mut AppState,
        env: &Env,
    ) {
        match event {
            Event::Command(cmd) if cmd.is(cmd::NAVIGATE) => {
                let nav = cmd.get_unchecked(cmd::NAVIGATE);
                data.navigate(nav);
                ctx.set_handled();
            }
            Event::Command(cmd) if cmd.is(cmd::NAVIGATE_BACK) => {
                self.navigate_back(ctx, data);
                ctx.set_handled();
            }
            Event::MouseDown(mouse) if mouse.button.is_x1() => {
                self.navigate_back(ctx, data);
                ctx.set_handled();
            }
            _ => {
                child.event(ctx, event, data, env);
            }
        }
    }
}
