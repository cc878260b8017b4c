// cargo watch -x 'fmt' -x 'run'  // 'run -- --some-arg'

pub mod azure;
pub mod cli;
pub mod error;
pub mod output;
pub mod poller;
pub mod validation;

pub use error::ArmvError;

use colored::Colorize;
use std::path::PathBuf;

use azure::ResourceDirectory;
use validation::MoveRequest;

/// Confirm both resource groups exist and assemble the move request.
///
/// Fails before the submitter is ever invoked when either group is missing
/// or the source group is empty.
pub async fn resolve_move_request<D: ResourceDirectory>(
    directory: &D,
    args: &cli::Args,
) -> Result<MoveRequest, ArmvError> {
    if !directory
        .resource_group_exists(&args.source_subscription_id, &args.source_resource_group)
        .await?
    {
        return Err(ArmvError::ResourceGroupNotFound(
            args.source_resource_group.clone(),
        ));
    }
    if !directory
        .resource_group_exists(&args.target_subscription_id, &args.target_resource_group)
        .await?
    {
        return Err(ArmvError::ResourceGroupNotFound(
            args.target_resource_group.clone(),
        ));
    }

    let resource_ids = directory
        .resource_ids(&args.source_subscription_id, &args.source_resource_group)
        .await?;
    if resource_ids.is_empty() {
        return Err(ArmvError::EmptyResourceGroup(
            args.source_resource_group.clone(),
        ));
    }

    let target_resource_group_id = directory
        .resource_group_id(&args.target_subscription_id, &args.target_resource_group)
        .await?;

    MoveRequest::new(resource_ids, target_resource_group_id)
}

/// Run the whole validation pipeline.
///
/// Enumeration, submission and polling are strictly sequential; the client,
/// arguments and operation handle are owned per run.
///
/// # Returns
/// * `Ok(PathBuf)` - Path of the report written
/// * `Err` - The first failing stage's error
pub async fn run(args: &cli::Args) -> Result<PathBuf, ArmvError> {
    args.validate()?;

    let bearer = azure::get_access_token().await?;
    let client = azure::ArmClient::new(bearer)?;

    azure::check_login(&client, &args.source_subscription_id).await?;
    println!(
        "{}",
        format!("Logged into Subscription Id: {}\n", args.source_subscription_id).yellow()
    );

    let request = resolve_move_request(&client, args).await?;

    let handle = validation::submit(
        &client,
        &args.source_subscription_id,
        &args.source_resource_group,
        &request,
    )
    .await?;

    let outcome = poller::poll_until_done(
        handle,
        &poller::FixedTick::default(),
        poller::POLL_DEADLINE,
        async {
            let _ = tokio::signal::ctrl_c().await;
        },
    )
    .await?;

    let report = output::interpret(&args.source_resource_group, &outcome)?;
    output::render(&report);
    output::write_report(&args.output_path, &report)
}
