use anyhow::Result;
use dotenvy::dotenv;
use log::{error, info, warn};
use serenity::async_trait;
use serenity::model::application::interaction::Interaction;
use serenity::model::gateway::Ready;
use serenity::model::id::GuildId;
use serenity::prelude::*;
use std::sync::Arc;
use std::time::Duration;

use sentinel::commands::{
    create_all_handlers, register_global_commands, register_guild_commands, HandlerContext,
    HandlerRegistry,
};
use sentinel::core::Config;
use sentinel::dispatch::{CommandKind, Dispatcher};
use sentinel::gateway;

struct Handler {
    dispatcher: Arc<Dispatcher>,
    guild_id: Option<GuildId>,
}

impl Handler {
    fn new(dispatcher: Dispatcher, guild_id: Option<GuildId>) -> Self {
        Handler {
            dispatcher: Arc::new(dispatcher),
            guild_id,
        }
    }
}

#[async_trait]
impl EventHandler for Handler {
    async fn ready(&self, ctx: Context, ready: Ready) {
        info!("🎉 {} is connected and ready!", ready.user.name);
        info!("📡 Connected to {} guilds", ready.guilds.len());
        info!("🤖 Bot ID: {}", ready.user.id);

        if let Some(shard) = ready.shard {
            info!("⚡ Shard: {}/{}", shard[0] + 1, shard[1]);
        }

        let registry = self.dispatcher.registry();
        let result = match self.guild_id {
            Some(guild_id) => register_guild_commands(&ctx, guild_id, registry).await,
            None => register_global_commands(&ctx, registry).await,
        };
        if let Err(e) = result {
            error!("Failed to register application commands: {e}");
        }
    }

    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        let Some(event) = gateway::classify(ctx.http.clone(), interaction) else {
            return;
        };
        // Outcome is already logged and reported to the user by the dispatcher
        self.dispatcher.route(event).await;
    }
}

/// Build the registry, failing fast on duplicate or colliding handler ids
fn load_registry(config: &Config) -> Result<HandlerRegistry> {
    let mut registry =
        HandlerRegistry::new().with_prefix_collision_check(config.reject_prefix_collisions);
    registry.register_all(create_all_handlers())?;

    for kind in CommandKind::ALL {
        let ids = registry.ids(kind);
        if !ids.is_empty() {
            info!("Loaded {} {kind} handler(s): {}", ids.len(), ids.join(", "));
        }
    }
    Ok(registry)
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenv().ok();

    let config = Config::from_env()?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&config.log_level))
        .init();

    // Last-resort net; handler panics are normally contained by the dispatcher
    std::panic::set_hook(Box::new(|panic_info| {
        error!("💥 Panic: {panic_info}");
    }));

    info!("Starting Sentinel Discord Bot...");

    let registry = Arc::new(load_registry(&config)?);
    let context = Arc::new(HandlerContext::new(registry.ids(CommandKind::Command)));
    let dispatcher =
        Dispatcher::new(Arc::clone(&registry), context).with_default_cooldown(config.default_cooldown);

    // Sweep cooldown entries whose expiry task never ran
    let cooldowns = dispatcher.cooldowns().clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_secs(300));
        loop {
            interval.tick().await;
            let purged = cooldowns.purge_expired();
            if purged > 0 {
                warn!("Purged {purged} stale cooldown entries");
            }
        }
    });

    // Parse guild ID if provided for development mode
    let guild_id = config
        .discord_guild_id
        .as_ref()
        .and_then(|id| id.parse::<u64>().ok())
        .map(GuildId);

    let handler = Handler::new(dispatcher, guild_id);

    let intents = GatewayIntents::GUILDS;

    let mut client = Client::builder(&config.discord_token, intents)
        .event_handler(handler)
        .await
        .map_err(|e| {
            error!("Failed to create Discord client: {e}");
            anyhow::anyhow!("Client creation failed: {}", e)
        })?;

    info!("Bot configured successfully. Connecting to Discord gateway...");

    if let Err(why) = client.start().await {
        error!("Gateway connection failed: {why:?}");
        return Err(anyhow::anyhow!(
            "Failed to establish gateway connection: {}",
            why
        ));
    }

    Ok(())
}
