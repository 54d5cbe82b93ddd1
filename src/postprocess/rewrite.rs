//! package句の書き換えとインポート注入

/// 最初のpackage句の宣言名を差し替える
///
/// package句以外の行はそのまま保持される。
pub fn change_package(source: &str, pkg_name: &str) -> String {
    let mut out = String::with_capacity(source.len());
    let mut done = false;

    for line in source.lines() {
        if !done && line.starts_with("package") {
            let mut parts: Vec<&str> = line.split(' ').collect();
            if parts.len() > 1 {
                parts[1] = pkg_name;
                out.push_str(&parts.join(" "));
            } else {
                out.push_str("package ");
                out.push_str(pkg_name);
            }
            out.push('\n');
            done = true;
            continue;
        }
        out.push_str(line);
        out.push('\n');
    }
    out
}

/// 最初のpackage句の直後に追加インポートを1行ずつ挿入する
pub fn add_imports(source: &str, import_paths: &[String]) -> String {
    let mut out = String::with_capacity(source.len());
    let mut done = false;

    for line in source.lines() {
        out.push_str(line);
        out.push('\n');

        if !done && line.starts_with("package") {
            for path in import_paths {
                out.push_str(&format!("import \"{}\"\n", path));
            }
            done = true;
        }
    }
    out
}
