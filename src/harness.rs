//! API test harness.
//!
//! Runs a connectivity pass against the backend from the command line: health
//! check, recipe listing, and a recipe detail fetch. Used as a quick check
//! that a backend deployment is wired up before launching the TUI.

use crate::api::ApiClient;
use crate::models::Recipe;

/// Result of one harness run.
pub struct ApiTestReport {
    pub backend_healthy: bool,
    pub health_message: Option<String>,
    pub response_time_ms: Option<u64>,
    pub recipes: Vec<Recipe>,
    pub recipe_detail_ok: Option<bool>,
    pub errors: Vec<String>,
}

impl ApiTestReport {
    /// Whether every exercised endpoint responded successfully.
    pub fn all_passed(&self) -> bool {
        self.backend_healthy && self.errors.is_empty()
    }
}

/// Run the harness against the backend.
///
/// The health check gates the rest: if the backend is unreachable there is no
/// point exercising the API endpoints.
pub async fn run_api_tests(client: &ApiClient) -> ApiTestReport {
    let mut report = ApiTestReport {
        backend_healthy: false,
        health_message: None,
        response_time_ms: None,
        recipes: Vec::new(),
        recipe_detail_ok: None,
        errors: Vec::new(),
    };

    let start = std::time::Instant::now();
    match client.health_check().await {
        Ok(health) => {
            report.backend_healthy = health.status == "ok";
            report.health_message = Some(health.message);
            report.response_time_ms = Some(start.elapsed().as_millis() as u64);
            if !report.backend_healthy {
                report.errors.push(format!("health status: {}", health.status));
            }
        }
        Err(e) => {
            report.errors.push(format!("health check: {}", e));
            return report;
        }
    }

    match client.list_recipes(0, 10).await {
        Ok(recipes) => report.recipes = recipes,
        Err(e) => report.errors.push(format!("list recipes: {}", e)),
    }

    if let Some(first) = report.recipes.first() {
        match client.get_recipe(&first.id).await {
            Ok(_) => report.recipe_detail_ok = Some(true),
            Err(e) => {
                report.recipe_detail_ok = Some(false);
                report.errors.push(format!("recipe detail: {}", e));
            }
        }
    }

    report
}

/// Print harness results to the terminal.
pub fn display_report(report: &ApiTestReport, base_url: &str) {
    println!();
    println!("API connection test against {}", base_url);
    println!();

    if report.backend_healthy {
        if let Some(ms) = report.response_time_ms {
            println!("✓ Backend responding ({}ms)", ms);
        } else {
            println!("✓ Backend responding");
        }
        if let Some(ref message) = report.health_message {
            if !message.is_empty() {
                println!("  {}", message);
            }
        }
    } else {
        println!("✗ Backend not responding");
        println!("  The server may be offline or still starting up.");
        println!("  Check the backend and try again.\n");
        return;
    }

    if report.errors.iter().any(|e| e.starts_with("list recipes")) {
        println!("✗ Recipe listing failed");
    } else {
        println!("✓ Fetched {} recipe(s)", report.recipes.len());
        for recipe in report.recipes.iter().take(5) {
            let region = recipe.region.as_deref().unwrap_or("-");
            println!("    {} ({})", recipe.name, region);
        }
    }

    match report.recipe_detail_ok {
        Some(true) => println!("✓ Recipe detail fetch works"),
        Some(false) => println!("✗ Recipe detail fetch failed"),
        None => println!("- Recipe detail fetch skipped (no recipes)"),
    }

    println!();
    if report.all_passed() {
        println!("✓ All checks passed\n");
    } else {
        println!("✗ Some checks failed:");
        for error in &report.errors {
            println!("    {}", error);
        }
        println!();
    }
}
