//! View state for decoupling rendering from the application shell.
//!
//! Rendering is a pure function of [`ShellView`]: `App` builds one per
//! frame from its store, the views read it and register hit areas.
//!
//! ```text
//! App (owns ViewStore) --view()--> ShellView (borrows) --> ui::render
//! ```

mod shell_view;

pub use shell_view::ShellView;
