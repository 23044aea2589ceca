//! Generators run against a project directory on disk.

use std::fs;

use stencil_codegen_typescript::{
    ControllerConfig, ControllerGenerator, ControllerKind, Injectable, ListGenerator,
    SassGenerator, SassKind,
};
use stencil_core::{Config, LocalStorage};
use tempfile::TempDir;

const ROUTE_TS: &str = "\
export function route($stateProvider) {
    // <stencil:router/>
}
";

const IMPORT_TS: &str = "\
import { BaseController } from \"../modules/BaseController\";
// <stencil:import/>

export const exporter = {
    controller: {
        // <stencil:controller/>
    },
    service: {
        // <stencil:service/>
    },
};
";

const COMMON_SCSS: &str = "\
// <stencil:scss-font/>
// <stencil:scss-page/>
// <stencil:scss-component/>
// <stencil:scss-directive/>
";

fn scaffold() -> TempDir {
    let dir = TempDir::new().unwrap();
    for (path, content) in [
        ("src/app/config/route.ts", ROUTE_TS),
        ("src/app/config/import.ts", IMPORT_TS),
        ("src/scss/_common.scss", COMMON_SCSS),
    ] {
        let path = dir.path().join(path);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }
    dir
}

fn read(dir: &TempDir, path: &str) -> String {
    fs::read_to_string(dir.path().join(path)).unwrap()
}

#[test]
fn test_controller_run_on_disk() {
    let dir = scaffold();
    let mut config = ControllerConfig::new("dashboard");
    config.module = Some("admin".to_string());
    config.injects = vec![
        Injectable::new("logService", "LogService").at("src/app/service/LogService"),
    ];

    let report = ControllerGenerator::new(config, &Config::default())
        .generate(&LocalStorage::new(), dir.path())
        .unwrap();
    assert!(report.is_clean());

    let controller = read(&dir, "src/app/modules/admin/DashboardController.ts");
    assert!(controller.starts_with(
        "import { BaseController } from \"../BaseController\";\n\
         import { AuthService, IAclActions } from \"../../service/AuthService\";\n\
         import { LogService } from \"../../service/LogService\";\n\n"
    ));
    assert!(controller.contains(
        "constructor(private logService: LogService, private authService: AuthService) {"
    ));
    assert!(controller.contains("AuthService.registerPermissions('admin.dashboard', {'admin.dashboard': ['read']});"));

    let route = read(&dir, "src/app/config/route.ts");
    assert!(route.contains("$stateProvider.state('admin.dashboard', {"));
    assert!(route.contains("'admin-content@admin': {"));
    assert_eq!(route.matches("// <stencil:router/>").count(), 1);

    let import = read(&dir, "src/app/config/import.ts");
    assert!(import.contains(
        "import { DashboardController } from \"../modules/admin/DashboardController\";\n// <stencil:import/>"
    ));
    assert!(import.contains("dashboardController: DashboardController,"));

    assert!(dir.path().join("src/scss/pages/_dashboard.scss").exists());
}

#[test]
fn test_rerunning_generators_is_idempotent() {
    let dir = scaffold();
    let storage = LocalStorage::new();
    let project = Config::default();

    let mut config = ControllerConfig::new("user");
    config.model = Some("User".to_string());
    config.kind = ControllerKind::List;
    let controller = ControllerGenerator::new(config, &project);
    let sass = SassGenerator::new("badge", SassKind::Component, "src/scss");

    controller.generate(&storage, dir.path()).unwrap();
    sass.generate(&storage, dir.path()).unwrap();
    let snapshot: Vec<String> = [
        "src/app/config/route.ts",
        "src/app/config/import.ts",
        "src/scss/_common.scss",
        "src/app/modules/user/UserController.ts",
        "src/app/modules/user/UserAddController.ts",
        "src/app/modules/user/UserEditController.ts",
    ]
    .iter()
    .map(|p| read(&dir, p))
    .collect();

    let again = controller.generate(&storage, dir.path()).unwrap();
    sass.generate(&storage, dir.path()).unwrap();
    assert!(again.spliced.is_empty());

    let after: Vec<String> = [
        "src/app/config/route.ts",
        "src/app/config/import.ts",
        "src/scss/_common.scss",
        "src/app/modules/user/UserController.ts",
        "src/app/modules/user/UserAddController.ts",
        "src/app/modules/user/UserEditController.ts",
    ]
    .iter()
    .map(|p| read(&dir, p))
    .collect();
    assert_eq!(snapshot, after);
}

#[test]
fn test_model_list_brings_its_form_controllers() {
    let dir = scaffold();
    let mut config = ControllerConfig::new("user");
    config.module = Some("admin".to_string());
    config.model = Some("User".to_string());

    let report = ControllerGenerator::new(config, &Config::default())
        .generate(&LocalStorage::new(), dir.path())
        .unwrap();
    assert!(report.is_clean());
    assert_eq!(report.written.len(), 3);

    let list = read(&dir, "src/app/modules/admin/user/UserController.ts");
    assert!(list.contains("controller: 'userAddController',"));
    assert!(list.contains("templateUrl: 'tpl/admin/user/userEditForm.html',"));

    let add = read(&dir, "src/app/modules/admin/user/UserAddController.ts");
    assert!(add.contains("export class UserAddController extends BaseController {"));
    assert!(add.contains("    public addUser() {"));
    assert!(add.contains("this.apiService.post<IUser, IUpsertResult<IUser>>('admin/user', user)"));

    let edit = read(&dir, "src/app/modules/admin/user/UserEditController.ts");
    assert!(edit.contains("    public editUser() {"));
    assert!(edit.contains("import { Err } from \"vesta-util/Err\";"));

    let route = read(&dir, "src/app/config/route.ts");
    assert_eq!(route.matches("$stateProvider.state('admin.user', {").count(), 1);

    let import = read(&dir, "src/app/config/import.ts");
    assert!(import.contains(
        "import { UserAddController } from \"../modules/admin/user/UserAddController\";"
    ));
    assert!(import.contains("userController: UserController,"));
    assert!(import.contains("userAddController: UserAddController,"));
    assert!(import.contains("userEditController: UserEditController,"));
}

#[test]
fn test_hand_edited_aggregator_is_isolated() {
    let dir = scaffold();
    fs::write(
        dir.path().join("src/app/config/import.ts"),
        "export const exporter = {};\n",
    )
    .unwrap();

    let report = ControllerGenerator::new(ControllerConfig::new("about"), &Config::default())
        .generate(&LocalStorage::new(), dir.path())
        .unwrap();

    assert_eq!(report.failed.len(), 1);
    assert!(report.failed[0].0.ends_with("src/app/config/import.ts"));
    assert_eq!(read(&dir, "src/app/config/import.ts"), "export const exporter = {};\n");
    assert!(read(&dir, "src/app/config/route.ts").contains("$stateProvider.state('about', {"));
    assert!(dir.path().join("src/app/modules/AboutController.ts").exists());
}

#[test]
fn test_list_component_on_disk() {
    let dir = scaffold();
    ListGenerator::new("category", &Config::default())
        .generate(&LocalStorage::new(), dir.path())
        .unwrap();

    let list = read(&dir, "src/client/app/components/category/CategoryList.tsx");
    assert!(list.contains("const [categories, setCategories] = useState<ICategory[]>([]);"));
    assert!(list.contains("    function onDelete(id: number) {"));
}
