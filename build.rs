use dotenvy::dotenv;

fn main() {
   // Tell Cargo that if the env file changes, to rerun this build script.
  println!("cargo::rerun-if-changed=.env");

  // .env is optional here; the default keeps a plain checkout buildable
  let _ = dotenv();

  let store_url = std::env::var("STORE_URL").unwrap_or_else(|_| "https://movemodefit.com.br".to_string());
  println!("cargo::rustc-env=STORE_URL={}", store_url);
}
