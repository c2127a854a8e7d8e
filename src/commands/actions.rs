use tracing::{info, info_span, warn, Instrument};
use vt_app::{ActionsBrowser, LoadActions};

use crate::cli::ActionsArgs;

use super::dto::{ActionsOutput, ActionsPage};

/// Used when neither `--width` nor `[list] viewport_width` is given.
pub const DEFAULT_VIEWPORT_WIDTH: u32 = 1280;

pub async fn browse_actions(
    load: &LoadActions,
    args: &ActionsArgs,
    configured_width: u32,
) -> ActionsOutput {
    let width = args
        .width
        .unwrap_or(match configured_width {
            0 => DEFAULT_VIEWPORT_WIDTH,
            w => w,
        });
    let span = info_span!("command.browse_actions", width, slide = args.slide);

    async {
        let mut browser = ActionsBrowser::new(width);
        browser.refresh(load).await;

        if args.options {
            return ActionsOutput::Options(browser.filter_options());
        }

        browser.set_criteria(args.criteria());
        let slide_count = browser.view().slide_count;
        if args.slide > 0 && args.slide >= slide_count {
            warn!(
                requested = args.slide,
                slide_count, "Requested slide out of range, showing the first slide"
            );
        }
        browser.go_to(args.slide);

        let view = browser.view();
        info!(
            matched = view.filtered.len(),
            slide = view.current_slide,
            "Actions page ready"
        );

        ActionsOutput::Page(ActionsPage {
            total: browser.snapshot().len(),
            matched: view.filtered.len(),
            slide: if view.slide_count == 0 {
                0
            } else {
                view.current_slide + 1
            },
            slide_count: view.slide_count,
            cards_per_view: view.cards_per_view,
            actions: view.visible.clone(),
            error: view.error.clone(),
        })
    }
    .instrument(span)
    .await
}
