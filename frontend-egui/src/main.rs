use eframe::{egui, App};
use split_core::view::{DashboardView, Layout};
use split_core::{Config, CurrentUser, Dashboard, Phase, Route, TransactionsClient};
use ui::friend_list::FriendList;
use ui::header::Header;
use ui::{animation, skeleton, summary, theme, transactions};

mod ui;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();
    pretty_env_logger::init();

    let config = Config::from_env().map_err(|e| {
        log::error!("{}", e);
        e
    })?;
    let client = TransactionsClient::new(&config)?;
    log::info!("Using split backend at {}", config.backend_url);

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Dashboard")
            .with_inner_size([1024.0, 720.0])
            .with_min_inner_size([320.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Dashboard",
        native_options,
        Box::new(move |cc| {
            theme::install(&cc.egui_ctx);
            egui_extras::install_image_loaders(&cc.egui_ctx);

            let ctx = cc.egui_ctx.clone();
            let dashboard = Dashboard::new(client).with_notifier(move || ctx.request_repaint());

            Box::new(DashboardApp::new(dashboard, config.current_user()))
        }),
    )?;

    Ok(())
}

struct DashboardApp {
    dashboard: Dashboard,
    route: Route,
    // Time at which content was first shown, drives the row fade-in
    loaded_at: Option<f64>,
}

impl DashboardApp {
    fn new(mut dashboard: Dashboard, user: Option<CurrentUser>) -> Self {
        if user.is_none() {
            log::warn!("No current user in the session, dashboard will stay on the placeholder");
        }
        // Runs detached; the notifier repaints once it lands.
        dashboard.mount(user);

        Self {
            dashboard,
            route: Route::Dashboard,
            loaded_at: None,
        }
    }

    fn navigate(&mut self, route: Route) {
        log::debug!("Navigating to {}", route.path());
        self.route = route;
    }
}

impl App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let state = self.dashboard.snapshot();
        let user = self.dashboard.current_user().cloned();
        let layout = Layout::for_width(ctx.screen_rect().width());

        let panel = egui::Frame::central_panel(&ctx.style())
            .fill(theme::background(layout))
            .inner_margin(16.0);

        let mut next_route = None;
        egui::CentralPanel::default().frame(panel).show(ctx, |ui| {
            let user = match (state.phase(), user) {
                (Phase::Loaded, Some(user)) => user,
                _ => {
                    skeleton::show(ui, layout);
                    return;
                }
            };

            let view = DashboardView::build(&state, &user);
            let now = ui.input(|i| i.time);
            let elapsed = now - *self.loaded_at.get_or_insert(now);

            match &self.route {
                Route::Dashboard => {
                    Header::show(ui);
                    summary::show(ui, &view.summary, layout);
                    ui.add_space(8.0);
                    next_route = FriendList::show(ui, &view.rows, layout, elapsed);

                    if animation::in_progress(elapsed, view.rows.len()) {
                        ctx.request_repaint();
                    }
                }
                Route::Transactions { friend, .. } => {
                    if transactions::show(ui, view.row(friend), friend) {
                        next_route = Some(Route::Dashboard);
                    }
                }
            }
        });

        if let Some(route) = next_route {
            self.navigate(route);
        }
    }
}
