//! CLI 명령 파싱 모듈.

use clap::{Parser, Subcommand};

use crate::domain::artifact::ArtifactKind;

#[derive(Debug, Parser)]
#[command(name = "mictl")]
#[command(about = "Management CLI for a running integration server")]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Management API base URL (overrides config file and MICTL_SERVER)
    #[arg(long, global = true)]
    server: Option<String>,

    /// Enable verbose (debug) logging
    #[arg(long, short, global = true)]
    verbose: bool,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List artifacts deployed on the server
    List {
        #[command(subcommand)]
        target: ListTarget,
    },
    /// Show details of a single artifact
    Show {
        #[command(subcommand)]
        target: ShowTarget,
    },
    /// Show effective merged config as JSON
    Config,
}

#[derive(Debug, Subcommand)]
enum ListTarget {
    /// List all the APIs
    Apis,
    /// List all the Endpoints
    Endpoints,
    /// List all the Sequences
    Sequences,
}

#[derive(Debug, Subcommand)]
enum ShowTarget {
    /// Get information about the specified Proxy Service
    #[command(name = "proxy-service", visible_alias = "proxyService")]
    ProxyService {
        /// Name of the Proxy Service
        #[arg(long, short)]
        name: String,
    },
}

/// 파싱이 끝난 실행 단위.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliAction {
    List {
        kind: ArtifactKind,
        server: Option<String>,
    },
    ShowProxyService {
        name: String,
        server: Option<String>,
    },
    InspectConfig,
}

/// 전역 플래그를 포함한 파싱 결과.
#[derive(Debug, Clone)]
pub struct ParsedAction {
    pub verbose: bool,
    pub action: CliAction,
}

impl Cli {
    /// 프로세스 인자를 파싱한다. 잘못된 입력은 clap이 사용법과 함께 종료시킨다.
    pub fn parse_action() -> ParsedAction {
        Cli::parse().into_action()
    }

    /// 테스트용: 임의 인자 목록을 파싱한다.
    pub fn try_parse_action<I, T>(args: I) -> Result<ParsedAction, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Ok(Cli::try_parse_from(args)?.into_action())
    }

    fn into_action(self) -> ParsedAction {
        let action = match self.command {
            Commands::List { target } => CliAction::List {
                kind: match target {
                    ListTarget::Apis => ArtifactKind::Api,
                    ListTarget::Endpoints => ArtifactKind::Endpoint,
                    ListTarget::Sequences => ArtifactKind::Sequence,
                },
                server: self.server,
            },
            Commands::Show {
                target: ShowTarget::ProxyService { name },
            } => CliAction::ShowProxyService {
                name,
                server: self.server,
            },
            Commands::Config => CliAction::InspectConfig,
        };

        ParsedAction {
            verbose: self.verbose,
            action,
        }
    }
}
