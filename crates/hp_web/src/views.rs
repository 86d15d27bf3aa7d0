use std::sync::OnceLock;
use hp_core::{Error, Result};
use minijinja::{context, Environment};

const INDEX_TEMPLATE: &str = "index.html";
const ERROR_TEMPLATE: &str = "error.html";

static TEMPLATES: OnceLock<Environment<'static>> = OnceLock::new();

/// Everything the index page can show.
#[derive(Debug, Clone, Default)]
pub struct IndexPage {
    pub fields: Vec<String>,
    pub prediction: Option<String>,
    pub error: Option<String>,
}

// `.html` names get minijinja's HTML auto-escaping
fn templates() -> Result<&'static Environment<'static>> {
    if let Some(env) = TEMPLATES.get() {
        return Ok(env);
    }

    let mut env = Environment::new();
    env.add_template(INDEX_TEMPLATE, include_str!("../templates/index.html"))
        .map_err(|e| Error::Render(format!("Invalid template {}: {}", INDEX_TEMPLATE, e)))?;
    env.add_template(ERROR_TEMPLATE, include_str!("../templates/error.html"))
        .map_err(|e| Error::Render(format!("Invalid template {}: {}", ERROR_TEMPLATE, e)))?;
    Ok(TEMPLATES.get_or_init(|| env))
}

fn render(name: &str, ctx: minijinja::Value) -> Result<String> {
    templates()?
        .get_template(name)
        .and_then(|template| template.render(ctx))
        .map_err(|e| Error::Render(format!("Failed to render {}: {}", name, e)))
}

pub fn render_index(page: &IndexPage) -> Result<String> {
    render(
        INDEX_TEMPLATE,
        context!(
            fields => &page.fields,
            prediction => &page.prediction,
            error => &page.error
        ),
    )
}

pub fn render_generic_error() -> Result<String> {
    render(ERROR_TEMPLATE, context!())
}
