/// Desktop host shell
/// Native choosers and error dialogs through tauri-plugin-dialog,
/// notifications as window events

use crate::bridge::Bridge;
use crate::config::FileFilter;
use crate::error::{ChooserError, PresentationFault};
use crate::services::{HostShell, Notification};
use async_trait::async_trait;
use std::path::PathBuf;
use tauri::{AppHandle, Emitter, Manager};
use tauri_plugin_dialog::{DialogExt, FilePath, MessageDialogKind};
use tokio::sync::oneshot;

pub type DesktopBridge = Bridge<TauriShell>;

/// Label of the editor window
pub const MAIN_WINDOW: &str = "main";

pub struct TauriShell {
    app: AppHandle,
}

impl TauriShell {
    pub fn new(app: AppHandle) -> Self {
        Self { app }
    }
}

fn into_local_path(path: Option<FilePath>) -> Result<Option<PathBuf>, ChooserError> {
    path.map(|p| p.into_path())
        .transpose()
        .map_err(|e| ChooserError(e.to_string()))
}

async fn chooser_answer(
    rx: oneshot::Receiver<Result<Option<PathBuf>, ChooserError>>,
) -> Result<Option<PathBuf>, ChooserError> {
    rx.await
        .map_err(|_| ChooserError("the dialog closed without an answer".to_string()))?
}

#[async_trait]
impl HostShell for TauriShell {
    async fn choose_save_path(
        &self,
        filter: &FileFilter,
    ) -> Result<Option<PathBuf>, ChooserError> {
        let extensions: Vec<&str> = filter.extensions.iter().map(String::as_str).collect();
        let mut builder = self.app.dialog().file().add_filter(&filter.name, &extensions);
        if let Some(window) = self.app.get_webview_window(MAIN_WINDOW) {
            builder = builder.set_parent(&window);
        }

        let (tx, rx) = oneshot::channel();
        builder.save_file(move |path| {
            let _ = tx.send(into_local_path(path));
        });
        chooser_answer(rx).await
    }

    async fn choose_directory(&self) -> Result<Option<PathBuf>, ChooserError> {
        let mut builder = self.app.dialog().file();
        if let Some(window) = self.app.get_webview_window(MAIN_WINDOW) {
            builder = builder.set_parent(&window);
        }

        let (tx, rx) = oneshot::channel();
        builder.pick_folder(move |path| {
            let _ = tx.send(into_local_path(path));
        });
        chooser_answer(rx).await
    }

    async fn report_fault(&self, fault: PresentationFault) {
        let mut builder = self
            .app
            .dialog()
            .message(fault.message)
            .title(fault.title)
            .kind(MessageDialogKind::Error);
        if let Some(window) = self.app.get_webview_window(MAIN_WINDOW) {
            builder = builder.parent(&window);
        }

        let (tx, rx) = oneshot::channel();
        builder.show(move |_| {
            let _ = tx.send(());
        });
        let _ = rx.await;
    }

    fn notify(&self, notification: Notification) {
        let channel = notification.channel();
        let sent = match notification {
            Notification::FileOpened(handle) => self.app.emit(channel, handle),
            Notification::ProjectOpened(dir) => self.app.emit(channel, dir),
            Notification::FilesList(entries) => self.app.emit(channel, entries),
        };
        if let Err(e) = sent {
            log::warn!("Failed to emit {}: {}", channel, e);
        }
    }
}
