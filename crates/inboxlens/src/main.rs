//! `InboxLens` - desktop client for an AI email analysis backend
//!
//! Stage emails, send them for analysis one at a time, and browse the
//! categories, importance scores, summaries and suggested replies that come
//! back. Built with the iced GUI framework.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

mod message;
mod model;
mod style;
mod view;

use chrono::Utc;
use iced::keyboard::{self, Key, Modifiers};
use iced::widget::{column, container};
use iced::{Element, Length, Subscription, Task};
use inboxlens_api::{
    AnalysisPayload, ApiClient, ClientConfig, HealthStatus, ListFilters, StatsSnapshot,
};
use inboxlens_core::{
    BatchOutcome, COPY_CONFIRMATION, Capabilities, CopyIndicator, InboxState, ProcessedEmail,
    ProcessedSet, SessionStore, StagedId, StatsRequestKey, StatsView, SubmitPolicy, UserSession,
    compose_full_reply, parse_import, reload_samples, resolve_reply, sample_inbox, submit_batch,
};
use tracing::{debug, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use message::{
    AddEmailMessage, DetailMessage, InboxMessage, KeyboardAction, Message, ResultsMessage,
    ServerMessage, View,
};
use model::{
    AddEmailState, AppSettings, BackendHealth, Notice, ResultsViewState, ServerListState,
    StatsState,
};
use style::widgets::palette::ThemeMode;

const APP_DIR: &str = "inboxlens";

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "inboxlens=debug,inboxlens_core=debug,inboxlens_api=debug".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ClientConfig::from_env()?;
    info!("Starting InboxLens against {}", config.base_url);
    let client = ApiClient::new(config)?;
    let policy = SubmitPolicy::from_env();

    iced::application(
        move || InboxLens::new(client.clone(), policy),
        InboxLens::update,
        InboxLens::view,
    )
    .title("InboxLens")
    .subscription(InboxLens::subscription)
    .run()?;

    Ok(())
}

/// Main application state.
struct InboxLens {
    client: ApiClient,
    policy: SubmitPolicy,
    session_store: SessionStore,
    /// Current view/screen.
    current_view: View,
    /// View the detail screen returns to.
    return_view: View,
    /// Identity partitioning server-side data. `None` until loaded.
    session: Option<UserSession>,
    inbox: InboxState,
    processed: ProcessedSet,
    results: ResultsViewState,
    add_email: AddEmailState,
    server: ServerListState,
    /// Email shown in the detail view.
    detail: Option<StagedId>,
    show_raw: bool,
    copy: CopyIndicator,
    is_deleting: bool,
    health: BackendHealth,
    capabilities: Capabilities,
    stats_key: Option<StatsRequestKey>,
    stats: StatsState,
    notice: Option<Notice>,
    theme_mode: ThemeMode,
}

impl InboxLens {
    /// Creates the application and starts loading settings, session and health.
    fn new(client: ApiClient, policy: SubmitPolicy) -> (Self, Task<Message>) {
        let session_store = SessionStore::new(data_dir().join("session.json"));
        let app = Self {
            client,
            policy,
            session_store,
            current_view: View::Inbox,
            return_view: View::Processed,
            session: None,
            inbox: InboxState::new(sample_inbox(Utc::now())),
            processed: ProcessedSet::new(),
            results: ResultsViewState::default(),
            add_email: AddEmailState::default(),
            server: ServerListState::default(),
            detail: None,
            show_raw: false,
            copy: CopyIndicator::default(),
            is_deleting: false,
            health: BackendHealth::Checking,
            capabilities: Capabilities::default(),
            stats_key: None,
            stats: StatsState::Idle,
            notice: None,
            theme_mode: ThemeMode::default(),
        };
        app.apply_theme();

        let startup = Task::batch([
            Task::perform(load_settings(), Message::SettingsLoaded),
            Task::perform(
                load_session(app.session_store.clone()),
                Message::SessionLoaded,
            ),
            Task::perform(check_health(app.client.clone()), Message::HealthChecked),
        ]);
        (app, startup)
    }

    /// Applies the current theme mode to the global palette.
    fn apply_theme(&self) {
        style::widgets::palette::set_theme(self.theme_mode);
    }

    /// Email shown in the detail view, from this session's results or the server list.
    fn find_email(&self, id: &StagedId) -> Option<&ProcessedEmail> {
        self.processed
            .get(id)
            .or_else(|| self.server.emails.iter().find(|e| &e.id == id))
    }

    fn selected_email(&self) -> Option<&ProcessedEmail> {
        self.detail.as_ref().and_then(|id| self.find_email(id))
    }

    /// Handle messages and update state.
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::NavigateTo(view) => return self.navigate(view),
            Message::DismissNotice => self.notice = None,
            Message::ToggleTheme => {
                self.theme_mode = self.theme_mode.toggled();
                self.apply_theme();
                info!("Theme changed to {:?}", self.theme_mode);
                let settings = AppSettings {
                    theme_mode: self.theme_mode,
                };
                return Task::perform(save_settings(settings), Message::SettingsSaved);
            }
            Message::SettingsLoaded(result) => match result {
                Ok(settings) => {
                    self.theme_mode = settings.theme_mode;
                    self.apply_theme();
                }
                Err(e) => warn!("Failed to load settings: {}", e),
            },
            Message::SettingsSaved(result) => {
                if let Err(e) = result {
                    warn!("Failed to save settings: {}", e);
                }
            }
            Message::SessionLoaded(result) => {
                let session = result.unwrap_or_else(|e| {
                    warn!("Failed to load session, using a temporary one: {}", e);
                    self.notice = Some(Notice::warning(format!(
                        "Could not load your session ({e}). A temporary one is in use."
                    )));
                    UserSession::generate()
                });
                info!("Session {}", session.id());
                self.stats_key = Some(StatsRequestKey::new(session.id()));
                self.session = Some(session);
                return self.refresh_current_view();
            }
            Message::ResetSession => {
                if self.inbox.is_processing() {
                    self.notice = Some(Notice::warning(
                        "Wait for processing to finish before starting a new session",
                    ));
                } else {
                    return Task::perform(
                        reset_session(self.session_store.clone()),
                        Message::SessionReset,
                    );
                }
            }
            Message::SessionReset(result) => match result {
                Ok(session) => return self.start_session(session),
                Err(e) => self.notice = Some(Notice::error(format!("Could not reset session: {e}"))),
            },
            Message::HealthChecked(result) => {
                self.health = BackendHealth::from_result(&result);
                self.capabilities = result
                    .as_ref()
                    .map(Capabilities::from_health)
                    .unwrap_or_default();
                match &result {
                    Ok(status) => info!("Backend status: {}", status.status),
                    Err(e) => warn!("Health check failed: {}", e),
                }
            }
            Message::Inbox(msg) => return self.handle_inbox(msg),
            Message::BatchFinished(outcome) => self.finish_batch(outcome),
            Message::AddEmail(msg) => return self.handle_add_email(msg),
            Message::ImportRead(result) => self.finish_import(result),
            Message::Results(msg) => self.handle_results(msg),
            Message::OpenDetail(id) => return self.open_detail(id),
            Message::Detail(msg) => return self.handle_detail(msg),
            Message::DetailRefreshed(id, result) => match result {
                Ok(payload) => {
                    if let Some(refreshed) = self.find_email(&id).map(|e| e.refreshed(payload)) {
                        if !self.processed.replace(refreshed.clone()) {
                            self.server.replace(refreshed);
                        }
                    }
                }
                Err(e) => {
                    self.notice = Some(Notice::warning(format!("Could not refresh this email: {e}")));
                }
            },
            Message::Deleted(id, result) => {
                self.is_deleting = false;
                match result {
                    Ok(()) => {
                        self.remove_everywhere(&id);
                        self.notice = Some(Notice::success("Email deleted"));
                        self.bump_stats();
                    }
                    Err(e) => self.notice = Some(Notice::error(format!("Delete failed: {e}"))),
                }
            }
            Message::CopyExpired(token) => self.copy.expire(token),
            Message::RefreshStats => return self.refresh_stats(),
            Message::StatsLoaded(key, result) => {
                if self.stats_key.as_ref() != Some(&key) {
                    debug!("Discarding stale statistics for refresh {}", key.refresh);
                } else {
                    self.stats = match result {
                        Ok(snapshot) => StatsState::Loaded(StatsView::from_snapshot(&snapshot)),
                        Err(e) => StatsState::Failed(e),
                    };
                }
            }
            Message::Server(msg) => return self.handle_server(msg),
            Message::ServerListLoaded(generation, result) => {
                if !self.server.finish_load(generation, result) {
                    debug!("Discarding stale server list {}", generation);
                }
            }
            Message::KeyPressed(action) => return self.handle_keyboard(action),
            Message::Noop => {}
        }
        Task::none()
    }

    /// Switches view, loading whatever the target view shows.
    fn navigate(&mut self, view: View) -> Task<Message> {
        if view == View::Detail && self.detail.is_none() {
            return Task::none();
        }
        if view != View::Detail {
            self.detail = None;
        }
        self.current_view = view;
        self.refresh_current_view()
    }

    fn refresh_current_view(&mut self) -> Task<Message> {
        match self.current_view {
            View::Stats => self.refresh_stats(),
            View::Server => self.load_server_list(),
            _ => Task::none(),
        }
    }

    /// Installs a fresh session and forgets everything tied to the old one.
    fn start_session(&mut self, session: UserSession) -> Task<Message> {
        info!("Started new session {}", session.id());
        self.stats_key = Some(StatsRequestKey::new(session.id()));
        self.session = Some(session);
        self.inbox.reset(sample_inbox(Utc::now()));
        self.processed.clear();
        self.server.reset();
        self.detail = None;
        self.stats = StatsState::Idle;
        self.current_view = View::Inbox;
        self.notice = Some(Notice::success("Started a new session"));
        Task::none()
    }

    /// Handle inbox staging messages.
    fn handle_inbox(&mut self, msg: InboxMessage) -> Task<Message> {
        match msg {
            InboxMessage::Toggle(id) => self.inbox.toggle(&id),
            InboxMessage::ToggleAll => {
                if self.inbox.all_selected() {
                    self.inbox.clear_selection();
                } else {
                    self.inbox.select_all();
                }
            }
            InboxMessage::Process => return self.process_selected(),
            InboxMessage::LoadSamples => {
                let before = self.inbox.len();
                self.inbox.extend(reload_samples(Utc::now()));
                let added = self.inbox.len() - before;
                self.notice = Some(Notice::info(format!("Loaded {added} sample emails")));
            }
            InboxMessage::ClearAll => self.inbox.clear(),
            InboxMessage::Remove(id) => {
                self.inbox.remove(&id);
            }
        }
        Task::none()
    }

    /// Starts a paced submission of the selected emails.
    fn process_selected(&mut self) -> Task<Message> {
        let Some(session) = self.session.clone() else {
            self.notice = Some(Notice::warning("Your session is still loading"));
            return Task::none();
        };

        match self.inbox.begin_submission() {
            Ok(ticket) => {
                info!("Processing {} emails", ticket.len());
                self.notice = Some(Notice::info(format!("Processing {} emails...", ticket.len())));
                let client = self.client.clone();
                let policy = self.policy;
                Task::perform(
                    async move { submit_batch(&client, &session, ticket.into_emails(), policy).await },
                    Message::BatchFinished,
                )
            }
            Err(err) => {
                self.notice = Some(Notice::warning(err.message()));
                Task::none()
            }
        }
    }

    fn finish_batch(&mut self, outcome: BatchOutcome) {
        let summary = outcome.summary();
        let first_failure = outcome
            .failures
            .first()
            .map(|(_, err)| err.user_message());
        let processed = self.inbox.finish_submission(outcome);
        self.processed.prepend(processed);

        self.notice = Some(match first_failure {
            None => Notice::success(format!("Processed {summary} emails")),
            Some(reason) => Notice::warning(format!("Processed {summary} emails. {reason}")),
        });
        self.detail = None;
        self.current_view = View::Processed;
        self.bump_stats();
    }

    /// Handle add-email form messages.
    fn handle_add_email(&mut self, msg: AddEmailMessage) -> Task<Message> {
        match msg {
            AddEmailMessage::SenderChanged(sender) => self.add_email.sender = sender,
            AddEmailMessage::SubjectChanged(subject) => self.add_email.subject = subject,
            AddEmailMessage::BodyChanged(body) => self.add_email.body = body,
            AddEmailMessage::ImportPathChanged(path) => self.add_email.import_path = path,
            AddEmailMessage::Submit => {
                if let Ok(email) = self.add_email.take_email() {
                    debug!("Added {} to the inbox", email.id);
                    self.inbox.add(email);
                    self.notice = Some(Notice::success("Email added to the inbox"));
                    self.current_view = View::Inbox;
                }
            }
            AddEmailMessage::Import => {
                let Some(path) = self.add_email.import_path().map(str::to_string) else {
                    self.add_email.error = Some("Enter the path of a JSON file".to_string());
                    return Task::none();
                };
                self.add_email.is_importing = true;
                self.add_email.error = None;
                return Task::perform(read_import(path), Message::ImportRead);
            }
            AddEmailMessage::Cancel => {
                self.add_email.reset();
                self.current_view = View::Inbox;
            }
        }
        Task::none()
    }

    fn finish_import(&mut self, result: Result<String, String>) {
        self.add_email.is_importing = false;
        match result.and_then(|json| parse_import(&json).map_err(|e| e.to_string())) {
            Ok(emails) => {
                let count = emails.len();
                info!("Imported {} emails", count);
                self.inbox.extend(emails);
                self.add_email.import_path.clear();
                self.notice = Some(Notice::success(format!("Imported {count} emails")));
                self.current_view = View::Inbox;
            }
            Err(e) => {
                warn!("Import rejected: {}", e);
                self.notice = Some(Notice::error(e.clone()));
                self.add_email.error = Some(e);
            }
        }
    }

    fn handle_results(&mut self, msg: ResultsMessage) {
        match msg {
            ResultsMessage::CategorySelected(filter) => self.results.filter.category = filter,
            ResultsMessage::SearchChanged(search) => self.results.filter.search = search,
            ResultsMessage::ToggleImportantOnly => {
                self.results.filter.important_only = !self.results.filter.important_only;
            }
            ResultsMessage::ToggleLayout => self.results.layout = self.results.layout.toggled(),
        }
    }

    fn open_detail(&mut self, id: StagedId) -> Task<Message> {
        let Some(remote_id) = self.find_email(&id).map(|e| e.remote_id.clone()) else {
            return Task::none();
        };
        if self.current_view != View::Detail {
            self.return_view = self.current_view;
        }
        self.detail = Some(id.clone());
        self.show_raw = false;
        self.copy = CopyIndicator::default();
        self.is_deleting = false;
        self.current_view = View::Detail;

        match (remote_id, self.session.as_ref().map(|s| s.id().to_string())) {
            (Some(remote_id), Some(user_id)) => Task::perform(
                fetch_email(self.client.clone(), remote_id, user_id),
                move |result| Message::DetailRefreshed(id, result),
            ),
            _ => Task::none(),
        }
    }

    /// Handle detail view messages.
    fn handle_detail(&mut self, msg: DetailMessage) -> Task<Message> {
        let Some(email) = self.selected_email() else {
            return Task::none();
        };
        match msg {
            DetailMessage::CopyReply | DetailMessage::CopyFullReply => {
                let contents = if matches!(msg, DetailMessage::CopyReply) {
                    resolve_reply(email)
                } else {
                    compose_full_reply(email)
                };
                let token = self.copy.mark();
                Task::batch([
                    iced::clipboard::write(contents),
                    Task::perform(tokio::time::sleep(COPY_CONFIRMATION), move |()| {
                        Message::CopyExpired(token)
                    }),
                ])
            }
            DetailMessage::ToggleRaw => {
                self.show_raw = !self.show_raw;
                Task::none()
            }
            DetailMessage::Feature(feature) => {
                self.notice = Some(if self.capabilities.is_enabled(feature) {
                    info!("{} requested for {}", feature.label(), email.id);
                    Notice::info(format!("{} requested for \"{}\"", feature.label(), email.subject))
                } else {
                    Notice::warning(feature.unavailable_notice())
                });
                Task::none()
            }
            DetailMessage::Delete => self.delete_selected(),
            DetailMessage::Back => {
                self.detail = None;
                self.current_view = self.return_view;
                Task::none()
            }
        }
    }

    /// Deletes the open email, on the server first when it is stored there.
    fn delete_selected(&mut self) -> Task<Message> {
        let Some(email) = self.selected_email() else {
            return Task::none();
        };
        let id = email.id.clone();
        let remote_id = email.remote_id.clone();
        let user_id = self.session.as_ref().map(|s| s.id().to_string());
        match (remote_id, user_id) {
            (Some(remote_id), Some(user_id)) => {
                self.is_deleting = true;
                Task::perform(
                    delete_remote(self.client.clone(), remote_id, user_id),
                    move |result| Message::Deleted(id, result),
                )
            }
            _ => {
                self.remove_everywhere(&id);
                self.notice = Some(Notice::success("Email removed"));
                Task::none()
            }
        }
    }

    /// Drops an email from local results and the server list, closing its detail.
    fn remove_everywhere(&mut self, id: &StagedId) {
        let remote_id = self.find_email(id).and_then(|e| e.remote_id.clone());
        self.processed.remove(id);
        if let Some(remote_id) = remote_id {
            self.server.remove(&remote_id);
        }
        if self.detail.as_ref() == Some(id) {
            self.detail = None;
            self.current_view = self.return_view;
        }
    }

    /// Moves to a new statistics key so in-flight responses are discarded.
    fn bump_stats(&mut self) {
        if let Some(key) = &self.stats_key {
            self.stats_key = Some(key.next());
            self.stats = StatsState::Idle;
        }
    }

    fn refresh_stats(&mut self) -> Task<Message> {
        let Some(key) = self.stats_key.as_ref().map(StatsRequestKey::next) else {
            return Task::none();
        };
        self.stats_key = Some(key.clone());
        self.stats = StatsState::Loading;
        Task::perform(
            fetch_stats(self.client.clone(), key.user_id.clone()),
            move |result| Message::StatsLoaded(key, result),
        )
    }

    /// Handle server list messages.
    fn handle_server(&mut self, msg: ServerMessage) -> Task<Message> {
        match msg {
            ServerMessage::CategorySelected(filter) => {
                self.server.category = filter;
                self.load_server_list()
            }
            ServerMessage::ToggleImportantOnly => {
                self.server.important_only = !self.server.important_only;
                self.load_server_list()
            }
            ServerMessage::Refresh => self.load_server_list(),
            ServerMessage::Delete(remote_id) => {
                let Some(session) = &self.session else {
                    return Task::none();
                };
                Task::perform(
                    delete_remote(self.client.clone(), remote_id.clone(), session.id().to_string()),
                    move |result| Message::Server(ServerMessage::Deleted(remote_id, result)),
                )
            }
            ServerMessage::Deleted(remote_id, result) => {
                match result {
                    Ok(()) => {
                        self.server.remove(&remote_id);
                        let local = self
                            .processed
                            .iter()
                            .find(|e| e.remote_id.as_deref() == Some(remote_id.as_str()))
                            .map(|e| e.id.clone());
                        if let Some(id) = local {
                            self.processed.remove(&id);
                        }
                        self.notice = Some(Notice::success("Email deleted"));
                        self.bump_stats();
                    }
                    Err(e) => self.notice = Some(Notice::error(format!("Delete failed: {e}"))),
                }
                Task::none()
            }
        }
    }

    fn load_server_list(&mut self) -> Task<Message> {
        let Some(session) = &self.session else {
            return Task::none();
        };
        let generation = self.server.begin_load();
        Task::perform(
            fetch_server_list(
                self.client.clone(),
                session.id().to_string(),
                self.server.filters(),
            ),
            move |result| Message::ServerListLoaded(generation, result),
        )
    }

    /// Handle keyboard shortcuts.
    fn handle_keyboard(&mut self, action: KeyboardAction) -> Task<Message> {
        match action {
            KeyboardAction::SelectAll if self.current_view == View::Inbox => {
                self.inbox.select_all();
                Task::none()
            }
            KeyboardAction::Process if self.current_view == View::Inbox => self.process_selected(),
            KeyboardAction::Back => match self.current_view {
                View::Detail if self.selected_email().is_none() => {
                    self.detail = None;
                    self.current_view = self.return_view;
                    Task::none()
                }
                View::Detail => self.handle_detail(DetailMessage::Back),
                View::AddEmail => self.handle_add_email(AddEmailMessage::Cancel),
                _ => {
                    self.notice = None;
                    Task::none()
                }
            },
            KeyboardAction::Refresh => self.refresh_current_view(),
            KeyboardAction::ShowTab(view) => self.navigate(view),
            KeyboardAction::SelectAll | KeyboardAction::Process => Task::none(),
        }
    }

    /// Render current state as UI.
    fn view(&self) -> Element<'_, Message> {
        let header = view::view_header(
            self.current_view,
            view::TabCounts {
                unprocessed: self.inbox.len(),
                processed: self.processed.len(),
            },
            &self.health,
            self.session.as_ref(),
            self.theme_mode,
        );

        let body = match self.current_view {
            View::Inbox => view::view_inbox(&self.inbox, Utc::now()),
            View::Processed => view::view_processed(&self.processed, &self.results),
            View::Detail => match self.selected_email() {
                Some(email) => view::view_detail(
                    email,
                    view::DetailProps {
                        reply: resolve_reply(email),
                        copied: self.copy.is_visible(),
                        show_raw: self.show_raw,
                        capabilities: self.capabilities,
                        is_deleting: self.is_deleting,
                    },
                ),
                None => view::view_processed(&self.processed, &self.results),
            },
            View::Stats => view::view_stats(&self.stats),
            View::AddEmail => view::view_add_email(&self.add_email),
            View::Server => view::view_server_list(&self.server),
        };

        let mut page = column![header].width(Length::Fill).height(Length::Fill);
        if let Some(notice) = &self.notice {
            page = page.push(container(view::view_notice(notice)).padding([8, 24]));
        }
        page = page.push(body);

        container(page)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(style::widgets::page_style)
            .into()
    }

    /// Subscribe to keyboard events for shortcuts.
    #[allow(clippy::unused_self)] // Required signature for iced subscription
    fn subscription(&self) -> Subscription<Message> {
        keyboard::listen().map(|event| {
            if let keyboard::Event::KeyPressed { key, modifiers, .. } = event {
                handle_key_press(key, modifiers).unwrap_or(Message::Noop)
            } else {
                Message::Noop
            }
        })
    }
}

/// Handle keyboard shortcuts and return appropriate message.
fn handle_key_press(key: Key, modifiers: Modifiers) -> Option<Message> {
    let ctrl = modifiers.command(); // Ctrl on Linux/Windows, Cmd on macOS

    let action = match key {
        // Ctrl+A: Select all staged emails
        Key::Character(c) if ctrl && c.as_str() == "a" => KeyboardAction::SelectAll,
        // Ctrl+Enter: Process the selection
        Key::Named(keyboard::key::Named::Enter) if ctrl => KeyboardAction::Process,
        // Escape: Back / cancel
        Key::Named(keyboard::key::Named::Escape) => KeyboardAction::Back,
        // F5: Refresh
        Key::Named(keyboard::key::Named::F5) => KeyboardAction::Refresh,
        // Ctrl+1..5: Tabs
        Key::Character(c) if ctrl => {
            let index = c.as_str().parse::<usize>().ok()?.checked_sub(1)?;
            KeyboardAction::ShowTab(*View::TABS.get(index)?)
        }
        _ => return None,
    };
    Some(Message::KeyPressed(action))
}

fn config_dir() -> std::path::PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| std::path::PathBuf::from("."))
        .join(APP_DIR)
}

fn data_dir() -> std::path::PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| std::path::PathBuf::from("."))
        .join(APP_DIR)
}

/// Load application settings from file.
async fn load_settings() -> Result<AppSettings, String> {
    let settings_path = config_dir().join("settings.json");

    if !settings_path.exists() {
        return Ok(AppSettings::default());
    }

    let contents = tokio::fs::read_to_string(&settings_path)
        .await
        .map_err(|e| e.to_string())?;

    serde_json::from_str(&contents).map_err(|e| e.to_string())
}

/// Save application settings to file.
async fn save_settings(settings: AppSettings) -> Result<(), String> {
    let dir = config_dir();

    tokio::fs::create_dir_all(&dir)
        .await
        .map_err(|e| e.to_string())?;

    let settings_path = dir.join("settings.json");
    let contents = serde_json::to_string_pretty(&settings).map_err(|e| e.to_string())?;

    tokio::fs::write(&settings_path, contents)
        .await
        .map_err(|e| e.to_string())?;

    tracing::info!("Settings saved to {:?}", settings_path);
    Ok(())
}

async fn load_session(store: SessionStore) -> Result<UserSession, String> {
    store.load_or_create().await.map_err(|e| e.to_string())
}

async fn reset_session(store: SessionStore) -> Result<UserSession, String> {
    store.reset().await.map_err(|e| e.to_string())
}

async fn check_health(client: ApiClient) -> Result<HealthStatus, String> {
    client.health_check().await.map_err(|e| e.user_message())
}

async fn fetch_stats(client: ApiClient, user_id: String) -> Result<StatsSnapshot, String> {
    client
        .get_stats(&user_id)
        .await
        .map(|response| response.data)
        .map_err(|e| e.user_message())
}

async fn fetch_server_list(
    client: ApiClient,
    user_id: String,
    filters: ListFilters,
) -> Result<Vec<ProcessedEmail>, String> {
    let response = client
        .get_emails(&user_id, &filters)
        .await
        .map_err(|e| e.user_message())?;
    debug!("Server returned {} stored emails", response.total);
    Ok(response
        .data
        .into_iter()
        .map(ProcessedEmail::from_remote)
        .collect())
}

async fn fetch_email(
    client: ApiClient,
    remote_id: String,
    user_id: String,
) -> Result<AnalysisPayload, String> {
    client
        .get_email_by_id(&remote_id, &user_id)
        .await
        .map(|response| response.data)
        .map_err(|e| e.user_message())
}

async fn delete_remote(client: ApiClient, remote_id: String, user_id: String) -> Result<(), String> {
    client
        .delete_email(&remote_id, &user_id)
        .await
        .map(|_| ())
        .map_err(|e| e.user_message())
}

/// Read a JSON import file.
async fn read_import(path: String) -> Result<String, String> {
    tokio::fs::read_to_string(&path)
        .await
        .map_err(|e| format!("Failed to read {path}: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use inboxlens_api::ApiError;
    use inboxlens_core::{Category, StagedEmail};

    fn app() -> InboxLens {
        let client = ApiClient::new(ClientConfig::local().unwrap()).unwrap();
        let (mut app, _) = InboxLens::new(client, SubmitPolicy::default());
        let _ = app.update(Message::SessionLoaded(Ok(UserSession::from_id("user_test"))));
        app
    }

    fn processed(id: &str, remote_id: Option<&str>) -> ProcessedEmail {
        let mut email = ProcessedEmail::from_remote(AnalysisPayload {
            id: remote_id.map(str::to_string),
            category: Some("Work".into()),
            subject: Some(format!("Subject {id}")),
            ..AnalysisPayload::default()
        });
        email.id = StagedId::new(id);
        email
    }

    fn ctrl() -> Modifiers {
        if cfg!(target_os = "macos") {
            Modifiers::LOGO
        } else {
            Modifiers::CTRL
        }
    }

    fn key_action(key: Key, modifiers: Modifiers) -> Option<KeyboardAction> {
        match handle_key_press(key, modifiers) {
            Some(Message::KeyPressed(action)) => Some(action),
            _ => None,
        }
    }

    #[test]
    fn test_shortcuts() {
        assert_eq!(
            key_action(Key::Character("a".into()), ctrl()),
            Some(KeyboardAction::SelectAll)
        );
        assert_eq!(
            key_action(Key::Named(keyboard::key::Named::Enter), ctrl()),
            Some(KeyboardAction::Process)
        );
        assert_eq!(
            key_action(Key::Named(keyboard::key::Named::Escape), Modifiers::empty()),
            Some(KeyboardAction::Back)
        );
        assert_eq!(
            key_action(Key::Named(keyboard::key::Named::F5), Modifiers::empty()),
            Some(KeyboardAction::Refresh)
        );
        assert_eq!(
            key_action(Key::Character("3".into()), ctrl()),
            Some(KeyboardAction::ShowTab(View::Stats))
        );
    }

    #[test]
    fn test_unbound_keys_are_ignored() {
        assert_eq!(key_action(Key::Character("a".into()), Modifiers::empty()), None);
        assert_eq!(key_action(Key::Named(keyboard::key::Named::Enter), Modifiers::empty()), None);
        assert_eq!(key_action(Key::Character("0".into()), ctrl()), None);
        assert_eq!(key_action(Key::Character("9".into()), ctrl()), None);
    }

    #[test]
    fn test_process_without_selection_warns() {
        let mut app = app();
        let _ = app.update(Message::Inbox(InboxMessage::Process));
        assert!(!app.inbox.is_processing());
        assert_eq!(
            app.notice.as_ref().map(|n| n.text.as_str()),
            Some("Please select at least one email to process")
        );
    }

    #[test]
    fn test_batch_finished_moves_results() {
        let mut app = app();
        let ids: Vec<StagedId> = app.inbox.emails()[..3].iter().map(|e| e.id.clone()).collect();
        for id in &ids {
            let _ = app.update(Message::Inbox(InboxMessage::Toggle(id.clone())));
        }
        let before = app.inbox.len();
        let _ = app.update(Message::Inbox(InboxMessage::Process));
        assert!(app.inbox.is_processing());

        let outcome = BatchOutcome {
            attempted_ids: ids.clone(),
            processed: vec![processed(ids[0].as_str(), None), processed(ids[2].as_str(), None)],
            failures: vec![(ids[1].clone(), ApiError::from_response(500, "{}"))],
        };
        let _ = app.update(Message::BatchFinished(outcome));

        assert!(!app.inbox.is_processing());
        assert_eq!(app.inbox.len(), before - 3);
        assert_eq!(app.processed.len(), 2);
        assert_eq!(app.current_view, View::Processed);
        let notice = app.notice.as_ref().map(|n| n.text.clone()).unwrap_or_default();
        assert!(notice.starts_with("Processed 2/3 emails"), "{notice}");
    }

    #[test]
    fn test_stale_stats_are_discarded() {
        let mut app = app();
        let _ = app.update(Message::NavigateTo(View::Stats));
        let stale = app.stats_key.clone().unwrap();
        let _ = app.update(Message::RefreshStats);
        let _ = app.update(Message::StatsLoaded(stale, Ok(StatsSnapshot::default())));
        assert_eq!(app.stats, StatsState::Loading);

        let current = app.stats_key.clone().unwrap();
        let snapshot = StatsSnapshot {
            total: 4,
            important: 1,
            by_category: [("Work".to_string(), 3), ("Spam".to_string(), 1)].into(),
        };
        let _ = app.update(Message::StatsLoaded(current, Ok(snapshot)));
        match &app.stats {
            StatsState::Loaded(view) => {
                assert_eq!(view.rows[0].category, Category::Work);
                assert_eq!(view.rows[0].percentage_label, "75.0%");
            }
            other => panic!("unexpected stats state {other:?}"),
        }
    }

    #[test]
    fn test_local_delete_without_remote_id() {
        let mut app = app();
        app.processed.prepend(vec![processed("local-1", None)]);
        let _ = app.update(Message::OpenDetail(StagedId::new("local-1")));
        assert_eq!(app.current_view, View::Detail);

        let _ = app.update(Message::Detail(DetailMessage::Delete));
        assert!(app.processed.is_empty());
        assert!(app.detail.is_none());
        assert_ne!(app.current_view, View::Detail);
    }

    #[test]
    fn test_failed_remote_delete_keeps_state() {
        let mut app = app();
        app.processed.prepend(vec![processed("sample-1", Some("r-1"))]);
        let _ = app.update(Message::OpenDetail(StagedId::new("sample-1")));
        let _ = app.update(Message::Detail(DetailMessage::Delete));
        assert!(app.is_deleting);

        let _ = app.update(Message::Deleted(StagedId::new("sample-1"), Err("Email not found".into())));
        assert!(!app.is_deleting);
        assert_eq!(app.processed.len(), 1);
        assert_eq!(app.current_view, View::Detail);
        assert_eq!(
            app.notice.as_ref().map(|n| n.text.as_str()),
            Some("Delete failed: Email not found")
        );
    }

    #[test]
    fn test_copy_confirmation_expires_for_latest_copy_only() {
        let mut app = app();
        app.processed.prepend(vec![processed("sample-2", None)]);
        let _ = app.update(Message::OpenDetail(StagedId::new("sample-2")));
        let first = app.copy.mark();
        let second = app.copy.mark();
        let _ = app.update(Message::CopyExpired(first));
        assert!(app.copy.is_visible());
        let _ = app.update(Message::CopyExpired(second));
        assert!(!app.copy.is_visible());
    }

    #[test]
    fn test_disabled_feature_shows_notice() {
        let mut app = app();
        app.processed.prepend(vec![processed("sample-3", None)]);
        let _ = app.update(Message::OpenDetail(StagedId::new("sample-3")));
        let _ = app.update(Message::Detail(DetailMessage::Feature(inboxlens_core::Feature::SendNow)));
        assert_eq!(
            app.notice.as_ref().map(|n| n.text.as_str()),
            Some("Sending email is not available yet.")
        );
    }

    #[test]
    fn test_import_adds_emails() {
        let mut app = app();
        app.inbox.clear();
        app.update_import(r#"[{"from":"a@x.com","subject":"Hi","content":"Body"}]"#);
        let emails: &[StagedEmail] = app.inbox.emails();
        assert_eq!(emails.len(), 1);
        assert_eq!(emails[0].sender, "a@x.com");
        assert_eq!(emails[0].body, "Body");

        app.update_import("{\"not\": \"an array\"}");
        assert_eq!(app.inbox.len(), 1);
        assert!(app.add_email.error.is_some());
    }

    #[test]
    fn test_reloaded_samples_never_restage_processed_emails() {
        let mut app = app();
        let first = app.inbox.emails()[0].clone();
        let _ = app.update(Message::Inbox(InboxMessage::Toggle(first.id.clone())));
        let _ = app.update(Message::Inbox(InboxMessage::Process));
        let _ = app.update(Message::BatchFinished(BatchOutcome {
            attempted_ids: vec![first.id.clone()],
            processed: vec![processed(first.id.as_str(), None)],
            failures: Vec::new(),
        }));
        assert_eq!(app.processed.len(), 1);

        let before = app.inbox.len();
        let _ = app.update(Message::Inbox(InboxMessage::LoadSamples));
        assert!(app.inbox.emails().iter().all(|e| e.id != first.id));
        assert_eq!(app.inbox.len(), before + sample_inbox(Utc::now()).len());

        let again = app
            .inbox
            .emails()
            .iter()
            .find(|e| e.subject == first.subject)
            .map(|e| e.id.clone())
            .unwrap();
        let _ = app.update(Message::Inbox(InboxMessage::Toggle(again.clone())));
        let _ = app.update(Message::Inbox(InboxMessage::Process));
        let _ = app.update(Message::BatchFinished(BatchOutcome {
            attempted_ids: vec![again.clone()],
            processed: vec![processed(again.as_str(), None)],
            failures: Vec::new(),
        }));
        assert_eq!(app.processed.len(), 2);
        assert!(app.processed.get(&first.id).is_some());
        assert!(app.processed.get(&again).is_some());
    }

    #[test]
    fn test_escape_leaves_detail_when_record_is_gone() {
        let mut app = app();
        app.server.emails = vec![processed("remote-r-9", Some("r-9"))];
        let _ = app.update(Message::NavigateTo(View::Server));
        let _ = app.update(Message::OpenDetail(StagedId::new("remote-r-9")));
        assert_eq!(app.current_view, View::Detail);

        app.server.emails.clear();
        let _ = app.update(Message::KeyPressed(KeyboardAction::Back));
        assert_eq!(app.current_view, View::Server);
        assert!(app.detail.is_none());
    }

    impl InboxLens {
        fn update_import(&mut self, json: &str) {
            let _ = self.update(Message::ImportRead(Ok(json.to_string())));
        }
    }
}
