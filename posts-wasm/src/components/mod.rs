pub(crate) mod post_panel;
