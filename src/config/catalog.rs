//! Static CDN catalog.
//!
//! Maps each game CDN to the hostname list file that describes it in the
//! uklans cache-domains repository.

/// A CDN and the hostname list file that describes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cdn {
    /// Display name, also used to select the CDN from the CLI
    pub name: &'static str,
    /// File name relative to the catalog base URL
    pub file: &'static str,
}

impl Cdn {
    /// Full URL of the CDN's hostname list under `base_url`.
    pub fn list_url(&self, base_url: &str) -> String {
        if base_url.ends_with('/') {
            format!("{base_url}{}", self.file)
        } else {
            format!("{base_url}/{}", self.file)
        }
    }

    /// Looks up a CDN by name, ignoring ASCII case.
    pub fn find(name: &str) -> Option<&'static Cdn> {
        CDNS.iter().find(|cdn| cdn.name.eq_ignore_ascii_case(name.trim()))
    }
}

/// Every CDN known to the diagnostics, in menu order.
pub const CDNS: &[Cdn] = &[
    Cdn { name: "ArenaNet", file: "arenanet.txt" },
    Cdn { name: "Blizzard", file: "blizzard.txt" },
    Cdn { name: "Battle State Games", file: "bsg.txt" },
    Cdn { name: "Call of Duty", file: "cod.txt" },
    Cdn { name: "City of Heroes", file: "cityofheroes.txt" },
    Cdn { name: "Daybreak Games", file: "daybreak.txt" },
    Cdn { name: "Epic Games", file: "epicgames.txt" },
    Cdn { name: "Frontier", file: "frontier.txt" },
    Cdn { name: "Neverwinter", file: "neverwinter.txt" },
    Cdn { name: "Nexus Mods", file: "nexusmods.txt" },
    Cdn { name: "Nintendo", file: "nintendo.txt" },
    Cdn { name: "Origin", file: "origin.txt" },
    Cdn { name: "Path of Exile", file: "pathofexile.txt" },
    Cdn { name: "RenegadeX", file: "renegadex.txt" },
    Cdn { name: "Riot Games", file: "riot.txt" },
    Cdn { name: "Rockstar Games", file: "rockstar.txt" },
    Cdn { name: "Sony", file: "sony.txt" },
    Cdn { name: "SQUARE ENIX", file: "square.txt" },
    Cdn { name: "Steam", file: "steam.txt" },
    Cdn { name: "Test", file: "test.txt" },
    Cdn { name: "The Elder Scrolls Online", file: "teso.txt" },
    Cdn { name: "UPlay", file: "uplay.txt" },
    Cdn { name: "Warframe", file: "warframe.txt" },
    Cdn { name: "WARGAMING", file: "wargaming.net.txt" },
    Cdn { name: "Windows Updates", file: "windowsupdates.txt" },
    Cdn { name: "Xbox Live", file: "xboxlive.txt" },
];
