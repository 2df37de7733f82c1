use crate::chain::constants::NATIVE_LOGO_SYMBOLS;
use crate::chain::to_bech32_address;
use crate::entity::{Blockchain, BridgeableTokenMapping, Network};
use log::warn;

const VIEWBLOCK_URL: &str = "https://meta.viewblock.io";
const TESTNET_TOKENS_URL: &str = "https://dr297zt0qngbx.cloudfront.net/tokens/testnet";

/// What a currency logo should render
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenLogo {
    /// Bundled artwork for the pre-migration ZIL token
    Legacy,
    Remote { url: String, fallback_url: String },
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LogoRequest<'a> {
    pub symbol: Option<&'a str>,
    pub address: &'a str,
    pub blockchain: Option<Blockchain>,
    pub legacy: bool,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LogoSettings {
    pub network: Network,
    pub dark_theme: bool,
}

impl LogoSettings {
    fn url_suffix(&self) -> &'static str {
        if self.dark_theme {
            "?t=dark"
        } else {
            ""
        }
    }
}

fn bech32_or_original(address: &str) -> String {
    to_bech32_address(address).unwrap_or_else(|e| {
        warn!("Cannot convert {} for logo lookup: {}", address, e);
        address.to_string()
    })
}

/// Bridged Ethereum tokens borrow the logo of their Zilliqa counterpart
fn logo_address(request: &LogoRequest, bridge: &BridgeableTokenMapping) -> String {
    if request.blockchain == Some(Blockchain::Ethereum) {
        let token_hash = request
            .address
            .strip_prefix("0x")
            .or_else(|| request.address.strip_prefix("0X"))
            .unwrap_or(request.address);

        if let Some(bridge_token) = bridge.eth.iter().find(|b| b.token_address == token_hash) {
            return bech32_or_original(&bridge_token.to_token_address);
        }
    }
    request.address.to_string()
}

pub fn resolve_logo(
    request: &LogoRequest,
    settings: &LogoSettings,
    bridge: &BridgeableTokenMapping,
) -> TokenLogo {
    if request.legacy {
        return TokenLogo::Legacy;
    }

    let suffix = settings.url_suffix();
    let is_zil = request
        .symbol
        .map(|symbol| NATIVE_LOGO_SYMBOLS.contains(&symbol))
        .unwrap_or(false);
    let address = logo_address(request, bridge);

    let url = match (settings.network, is_zil) {
        (_, true) => format!("{}/ZIL/logo{}", VIEWBLOCK_URL, suffix),
        (Network::TestNet, false) => format!("{}/{}", TESTNET_TOKENS_URL, address),
        (Network::MainNet, false) => {
            let key = if address.starts_with("0x") {
                bech32_or_original(&address)
            } else {
                address
            };
            format!("{}/ZIL.{}/logo{}", VIEWBLOCK_URL, key, suffix)
        }
    };

    TokenLogo::Remote {
        url,
        fallback_url: format!("{}/ZIL.notfound/logo{}", VIEWBLOCK_URL, suffix),
    }
}
