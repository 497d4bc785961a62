#[tokio::main]
async fn main() -> std::io::Result<()> {
    booking_widget::run().await
}
