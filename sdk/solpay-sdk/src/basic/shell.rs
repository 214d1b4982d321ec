use crate::basic::session::WalletSessionController;
use crate::core::connection::LedgerClient;
use crate::core::constants::APP_TITLE;
use crate::error::Result;
use crate::types::{PaymentReceipt, Session};

/// What the wallet panel should render for the current session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalletView {
    pub connect_label: &'static str,
    pub connect_enabled: bool,
    /// `"Connected: <key>"` while a key is held
    pub status_line: Option<String>,
    pub show_payment: bool,
    pub show_disconnect: bool,
}

impl WalletView {
    pub fn for_session(session: &Session) -> Self {
        let connected = session.is_connected();
        Self {
            connect_label: if connected {
                "Wallet Connected"
            } else {
                "Connect Wallet"
            },
            connect_enabled: !connected,
            status_line: session.public_key().map(|key| format!("Connected: {}", key)),
            show_payment: connected,
            show_disconnect: connected,
        }
    }
}

/// Root page: holds the session and hands button presses to the controller.
pub struct AppShell<L: LedgerClient> {
    title: String,
    wallet: WalletSessionController<L>,
    session: Session,
}

impl<L: LedgerClient> AppShell<L> {
    pub fn new(wallet: WalletSessionController<L>) -> Self {
        Self {
            title: APP_TITLE.to_string(),
            wallet,
            session: Session::disconnected(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn wallet(&self) -> &WalletSessionController<L> {
        &self.wallet
    }

    pub fn view(&self) -> WalletView {
        WalletView::for_session(&self.session)
    }

    pub async fn connect_clicked(&mut self) -> Result<()> {
        self.session = self.wallet.connect(&self.session).await?;
        Ok(())
    }

    pub async fn disconnect_clicked(&mut self) -> Result<()> {
        let (session, outcome) = self.wallet.disconnect(&self.session).await;
        self.session = session;
        outcome
    }

    pub async fn pay_clicked(&self) -> Result<PaymentReceipt> {
        self.wallet.pay(&self.session).await
    }
}
