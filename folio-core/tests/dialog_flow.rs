mod common;

use common::{by_id, page, trigger_button, two_step_item};
use folio_core::dialog::{DialogMessage, ProjectDialog};
use folio_core::focus::{Key, KeyOutcome, KeyPress};
use folio_core::{Document, ElementSpec, MemoryDocument, MountIds};
use folio_model::{Sandbox, SpotlightItem};

fn open_dialog() -> (MemoryDocument, ProjectDialog, MountIds) {
    let (doc, ids) = page();
    let mut dialog = ProjectDialog::mount(&doc, &ids.dialog);
    dialog.init();
    (doc, dialog, ids)
}

#[test]
fn opening_activates_first_step_and_outcome_fallback() {
    let (mut doc, mut dialog, ids) = open_dialog();
    let trigger = trigger_button(&mut doc);

    dialog.open(&mut doc, &two_step_item(), Some(trigger));

    assert!(dialog.is_open());
    assert_eq!(dialog.active_step(), Some(0));
    let tabs = dialog.walkthrough().tabs().to_vec();
    assert_eq!(tabs.len(), 2);
    assert_eq!(doc.text_content(tabs[0]), "Step A");
    assert_eq!(doc.attribute(tabs[0], "aria-selected"), Some("true"));
    assert_eq!(doc.attribute(tabs[1], "aria-selected"), Some("false"));

    let outcomes = by_id(&doc, &ids.dialog.outcomes);
    let cards = doc.children(outcomes);
    assert_eq!(cards.len(), 1);
    assert_eq!(doc.text_content(cards[0]), "Outcomes to be published soon.");

    assert_eq!(doc.text_content(by_id(&doc, &ids.dialog.title)), "X");
    assert_eq!(
        doc.text_content(by_id(&doc, &ids.dialog.step_metric_value)),
        "< 1s"
    );
    assert!(!doc.is_hidden(by_id(&doc, &ids.dialog.step_code_block)));
    assert_eq!(
        doc.attribute(by_id(&doc, &ids.dialog.step_code), "data-language"),
        Some("Go")
    );
}

#[test]
fn selecting_a_step_switches_tab_and_detail() {
    let (mut doc, mut dialog, ids) = open_dialog();
    dialog.open(&mut doc, &two_step_item(), None);

    assert!(dialog.select_walkthrough_step(&mut doc, 1));

    let tabs = dialog.walkthrough().tabs().to_vec();
    assert_eq!(dialog.active_step(), Some(1));
    assert_eq!(doc.attribute(tabs[0], "aria-selected"), Some("false"));
    assert_eq!(doc.attribute(tabs[1], "aria-selected"), Some("true"));
    assert_eq!(
        doc.text_content(by_id(&doc, &ids.dialog.step_label)),
        "Step B"
    );
    assert_eq!(
        doc.text_content(by_id(&doc, &ids.dialog.step_summary)),
        "Step B summary"
    );
    // Step B has neither metric nor code.
    assert!(doc.is_hidden(by_id(&doc, &ids.dialog.step_metric)));
    assert!(doc.is_hidden(by_id(&doc, &ids.dialog.step_code_block)));
}

#[test]
fn invalid_step_index_is_ignored() {
    let (mut doc, mut dialog, _) = open_dialog();
    dialog.open(&mut doc, &two_step_item(), None);
    assert!(!dialog.select_walkthrough_step(&mut doc, 7));
    assert_eq!(dialog.active_step(), Some(0));
}

#[test]
fn clicking_a_tab_selects_its_step() {
    let (mut doc, mut dialog, _) = open_dialog();
    dialog.open(&mut doc, &two_step_item(), None);
    let second = dialog.walkthrough().tabs()[1];
    assert!(dialog.handle_click(&mut doc, second));
    assert_eq!(dialog.active_step(), Some(1));
}

#[test]
fn reopening_resets_active_step() {
    let (mut doc, mut dialog, _) = open_dialog();
    dialog.open(&mut doc, &two_step_item(), None);
    dialog.select_walkthrough_step(&mut doc, 1);
    dialog.open(&mut doc, &two_step_item(), None);
    assert_eq!(dialog.active_step(), Some(0));
}

#[test]
fn empty_walkthrough_hides_section() {
    let (mut doc, mut dialog, ids) = open_dialog();
    dialog.open(&mut doc, &SpotlightItem::default(), None);
    assert_eq!(dialog.active_step(), None);
    assert!(doc.is_hidden(by_id(&doc, &ids.dialog.walkthrough)));
    let tabs = by_id(&doc, &ids.dialog.walkthrough_tabs);
    assert!(doc.children(tabs).is_empty());
    assert_eq!(
        doc.text_content(by_id(&doc, &ids.dialog.title)),
        "Project spotlight"
    );
    assert_eq!(
        doc.text_content(by_id(&doc, &ids.dialog.roles)),
        "Hands-on partner"
    );
    assert!(doc.is_hidden(by_id(&doc, &ids.dialog.meta)));
}

#[test]
fn close_restores_focus_scroll_lock_and_clears_subviews() {
    let (mut doc, mut dialog, ids) = open_dialog();
    let trigger = trigger_button(&mut doc);
    doc.set_body_overflow("auto");
    doc.focus(trigger);

    let item = SpotlightItem {
        sandbox: Some(Sandbox {
            src: Some("https://sandbox.example".into()),
            ..Default::default()
        }),
        ..two_step_item()
    };
    dialog.open(&mut doc, &item, Some(trigger));
    assert_eq!(doc.body_overflow(), "hidden");
    assert_eq!(doc.active_element(), Some(by_id(&doc, &ids.dialog.close)));
    assert_eq!(dialog.sandbox().embedded(), Some("https://sandbox.example"));

    dialog.close(&mut doc);

    assert!(!dialog.is_open());
    assert!(!dialog.is_trapping_focus());
    assert!(doc.is_hidden(by_id(&doc, &ids.dialog.root)));
    assert_eq!(doc.body_overflow(), "auto");
    assert_eq!(doc.active_element(), Some(trigger));
    assert_eq!(dialog.active_step(), None);
    assert_eq!(dialog.sandbox().embedded(), None);
    let frame = by_id(&doc, &ids.dialog.sandbox_frame);
    assert_eq!(doc.attribute(frame, "src"), None);
    assert_eq!(doc.scroll_top(by_id(&doc, &ids.dialog.content)), 0);
}

#[test]
fn reopen_while_open_keeps_original_overflow() {
    let (mut doc, mut dialog, _) = open_dialog();
    doc.set_body_overflow("scroll");
    dialog.open(&mut doc, &two_step_item(), None);
    dialog.open(&mut doc, &two_step_item(), None);
    dialog.close(&mut doc);
    assert_eq!(doc.body_overflow(), "scroll");
}

#[test]
fn close_when_closed_is_a_no_op() {
    let (mut doc, mut dialog, _) = open_dialog();
    doc.set_body_overflow("auto");
    dialog.close(&mut doc);
    dialog.close(&mut doc);
    assert_eq!(doc.body_overflow(), "auto");
    assert!(!dialog.is_open());
}

#[test]
fn detached_trigger_is_not_refocused() {
    let (mut doc, mut dialog, _) = open_dialog();
    let trigger = trigger_button(&mut doc);
    dialog.open(&mut doc, &two_step_item(), Some(trigger));
    doc.detach(trigger);
    dialog.close(&mut doc);
    assert!(!doc.is_connected(trigger));
    assert_ne!(doc.active_element(), Some(trigger));
}

#[test]
fn escape_closes_and_tab_wraps() {
    let (mut doc, mut dialog, ids) = open_dialog();
    let item = SpotlightItem {
        demo_href: Some("https://demo.example".into()),
        demo_label: Some("Launch".into()),
        ..two_step_item()
    };
    dialog.open(&mut doc, &item, None);

    let root = by_id(&doc, &ids.dialog.root);
    let focusable = doc.focusable_within(root);
    let close = by_id(&doc, &ids.dialog.close);
    let link = by_id(&doc, &ids.dialog.sandbox_link);
    assert_eq!(focusable.first(), Some(&close));
    assert_eq!(focusable.last(), Some(&link));

    // Shift+Tab on the first element wraps to the last.
    let outcome = dialog.handle_key(&mut doc, KeyPress::new(Key::Tab).shifted());
    assert_eq!(outcome, KeyOutcome::Handled);
    assert_eq!(doc.active_element(), Some(link));

    // Tab on the last wraps to the first.
    let outcome = dialog.handle_key(&mut doc, KeyPress::new(Key::Tab));
    assert_eq!(outcome, KeyOutcome::Handled);
    assert_eq!(doc.active_element(), Some(close));

    // Tab in the middle is left to the browser.
    doc.focus(focusable[1]);
    assert_eq!(
        dialog.handle_key(&mut doc, KeyPress::new(Key::Tab)),
        KeyOutcome::Ignored
    );

    assert_eq!(
        dialog.handle_key(&mut doc, KeyPress::new(Key::Escape)),
        KeyOutcome::Handled
    );
    assert!(!dialog.is_open());
    assert_eq!(
        dialog.handle_key(&mut doc, KeyPress::new(Key::Escape)),
        KeyOutcome::Ignored
    );
}

#[test]
fn overlay_and_close_button_dismiss() {
    let (mut doc, mut dialog, ids) = open_dialog();
    let overlay = by_id(&doc, &ids.dialog.overlay);
    let close = by_id(&doc, &ids.dialog.close);

    dialog.open(&mut doc, &two_step_item(), None);
    assert!(dialog.handle_click(&mut doc, overlay));
    assert!(!dialog.is_open());

    dialog.open(&mut doc, &two_step_item(), None);
    assert!(dialog.handle_click(&mut doc, close));
    assert!(!dialog.is_open());
}

#[test]
fn dismiss_clicks_need_init() {
    let (mut doc, ids) = page();
    let mut dialog = ProjectDialog::mount(&doc, &ids.dialog);
    let close = by_id(&doc, &ids.dialog.close);
    dialog.open(&mut doc, &two_step_item(), None);
    assert!(!dialog.handle_click(&mut doc, close));
    assert!(dialog.is_open());
}

#[test]
fn sandbox_link_without_frame() {
    let (mut doc, mut dialog, ids) = open_dialog();
    let item = SpotlightItem {
        demo_href: Some("https://demo.example".into()),
        ..Default::default()
    };
    dialog.open(&mut doc, &item, None);

    assert!(!doc.is_hidden(by_id(&doc, &ids.dialog.sandbox)));
    assert!(doc.is_hidden(by_id(&doc, &ids.dialog.sandbox_frame)));
    let link = by_id(&doc, &ids.dialog.sandbox_link);
    assert!(!doc.is_hidden(link));
    assert_eq!(doc.attribute(link, "href"), Some("https://demo.example"));
    assert_eq!(doc.text_content(link), "Open live demo");
    assert_eq!(
        doc.text_content(by_id(&doc, &ids.dialog.sandbox_title)),
        "Interactive demo"
    );
}

#[test]
fn no_sandbox_or_demo_hides_panel() {
    let (mut doc, mut dialog, ids) = open_dialog();
    let item = SpotlightItem {
        demo_href: Some("https://demo.example".into()),
        ..Default::default()
    };
    dialog.open(&mut doc, &item, None);
    dialog.open(&mut doc, &SpotlightItem::default(), None);
    assert!(doc.is_hidden(by_id(&doc, &ids.dialog.sandbox)));
    assert_eq!(dialog.sandbox().link(), None);
}

#[test]
fn missing_root_makes_everything_inert() {
    let mut doc = MemoryDocument::new();
    let mut dialog = ProjectDialog::mount(&doc, &Default::default());
    dialog.init();
    dialog.open(&mut doc, &two_step_item(), None);
    assert!(!dialog.is_open());
    dialog.close(&mut doc);
    assert!(!dialog.select_walkthrough_step(&mut doc, 0));
    assert_eq!(doc.body_overflow(), "");
}

#[test]
fn missing_sub_elements_are_skipped() {
    let mut doc = MemoryDocument::new();
    let body = doc.body();
    let ids = MountIds::default();
    let root = ElementSpec::new("div").id(&ids.dialog.root).class("hidden");
    doc.append(body, root);
    let title = doc.append(body, ElementSpec::new("h2").id(&ids.dialog.title));

    let mut dialog = ProjectDialog::mount(&doc, &ids.dialog);
    dialog.open(&mut doc, &two_step_item(), None);

    assert!(dialog.is_open());
    assert_eq!(doc.text_content(title), "X");
    // No tab strip on the page, but the walkthrough state still holds.
    assert_eq!(dialog.active_step(), Some(0));
    assert!(dialog.select_walkthrough_step(&mut doc, 1));
}

#[test]
fn update_dispatches_every_dialog_message() {
    let (mut doc, mut dialog, _) = open_dialog();
    let trigger = trigger_button(&mut doc);
    doc.focus(trigger);

    let open = DialogMessage::Open {
        item: Box::new(two_step_item()),
        trigger: Some(trigger),
    };
    assert!(dialog.update(&mut doc, open));
    assert!(dialog.is_open());
    assert_eq!(dialog.active_step(), Some(0));

    assert!(dialog.update(&mut doc, DialogMessage::SelectStep(1)));
    assert_eq!(dialog.active_step(), Some(1));
    assert!(!dialog.update(&mut doc, DialogMessage::SelectStep(5)));
    assert_eq!(dialog.active_step(), Some(1));

    let first = dialog.walkthrough().tabs()[0];
    assert!(dialog.update(&mut doc, DialogMessage::Clicked(first)));
    assert_eq!(dialog.active_step(), Some(0));

    let escape = DialogMessage::Key(KeyPress::new(Key::Escape));
    assert!(dialog.update(&mut doc, escape));
    assert!(!dialog.is_open());
    assert_eq!(doc.active_element(), Some(trigger));

    assert!(!dialog.update(&mut doc, DialogMessage::Close));
}
